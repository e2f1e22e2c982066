//! Request extractors shared by the handlers.
//!
//! - [`LenientJson`] reads a JSON body but treats unparsable input as an
//!   empty object, leaving field-level validation to report what is
//!   missing.
//! - [`Authenticated`] resolves the `Authorization: Token <key>` header to
//!   a member before the handler runs, short-circuiting with 401.

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{Error, TokenKey, UserId, parse_token_header};
use crate::inbound::http::state::HttpState;

/// JSON body that falls back to `T::default()` when it cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LenientJson<T>(pub T);

impl<T> LenientJson<T> {
    /// Unwrap the parsed body.
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn parse_lenient<T: DeserializeOwned + Default>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap_or_else(|err| {
        debug!(error = %err, "request body is not the expected JSON; treating as empty");
        T::default()
    })
}

impl<T> FromRequest for LenientJson<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = body.await?;
            Ok(Self(parse_lenient(&bytes)))
        })
    }
}

/// Raw `Authorization` header value, if present and valid UTF-8.
pub(crate) fn authorization_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// A request whose bearer token resolved to a member.
#[derive(Debug, Clone)]
pub struct Authenticated {
    /// Member the token belongs to.
    pub user: UserId,
    /// Token presented by the client.
    pub token: TokenKey,
}

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = authorization_header(req);
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        Box::pin(async move {
            let token = parse_token_header(header.as_deref())
                .map_err(|err| Error::unauthorized(err.to_string()))?;
            let state = state.ok_or_else(|| Error::internal("HTTP state is not registered"))?;
            let user = state.auth.authenticate(&token).await?;
            Ok(Self { user, token })
        })
    }
}
