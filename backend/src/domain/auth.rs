//! Authentication primitives: credentials, sign-up input and bearer tokens.
//!
//! Inbound adapters hand raw strings to the constructors here; the
//! validation messages are the exact texts returned to clients.

use std::fmt;

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use zeroize::Zeroizing;

/// Length of generated token keys.
pub const TOKEN_KEY_LENGTH: usize = 40;

/// Literal prefix expected in the `Authorization` header.
pub const TOKEN_PREFIX: &str = "Token ";

/// Validation failures for login and sign-up payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// Username or password was blank.
    #[error("Username and password are required.")]
    MissingLoginFields,
    /// Username, email or password was blank.
    #[error("Username, email and password are required.")]
    MissingSignupFields,
}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty and kept verbatim, whitespace included.
///
/// # Examples
/// ```
/// use bijou_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" amy ", "secret123").expect("valid");
/// assert_eq!(creds.username(), "amy");
/// assert_eq!(creds.password(), "secret123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(CredentialsValidationError::MissingLoginFields);
        }
        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username used for the credential lookup.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password supplied by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated sign-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    username: String,
    email: String,
    password: Zeroizing<String>,
}

impl SignupRequest {
    /// Construct a sign-up request, trimming username and email.
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let username = username.trim();
        let email = email.trim();
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(CredentialsValidationError::MissingSignupFields);
        }
        Ok(Self {
            username: username.to_owned(),
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested username.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Contact address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plain-text password, hashed before storage.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Opaque bearer token key.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenKey(String);

impl TokenKey {
    /// Draw a fresh key of [`TOKEN_KEY_LENGTH`] alphanumeric characters from
    /// the operating system CSPRNG.
    #[must_use]
    pub fn generate() -> Self {
        let key = OsRng
            .sample_iter(&Alphanumeric)
            .take(TOKEN_KEY_LENGTH)
            .map(char::from)
            .collect();
        Self(key)
    }

    /// Wrap an existing key value, e.g. one read back from storage.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenKey(..)")
    }
}

/// Failure to read a token from an `Authorization` header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Authentication credentials were not provided.")]
pub struct MissingCredentials;

/// Extract the token key from a raw `Authorization` header value.
///
/// The prefix must be exactly `Token ` (case-sensitive); surrounding
/// whitespace after the prefix is ignored.
///
/// ```
/// use bijou_backend::domain::parse_token_header;
///
/// let key = parse_token_header(Some("Token abc123")).expect("token");
/// assert_eq!(key.as_str(), "abc123");
/// assert!(parse_token_header(Some("Bearer abc123")).is_err());
/// assert!(parse_token_header(None).is_err());
/// ```
pub fn parse_token_header(raw: Option<&str>) -> Result<TokenKey, MissingCredentials> {
    let key = raw
        .and_then(|value| value.strip_prefix(TOKEN_PREFIX))
        .ok_or(MissingCredentials)?;
    Ok(TokenKey::from_raw(key.trim()))
}
