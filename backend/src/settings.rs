//! Runtime configuration loaded via OrthoConfig.
//!
//! Values come from `BIJOU_*` environment variables, an optional
//! configuration file and command-line flags, in increasing precedence.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::state::DEFAULT_MEDIA_BASE_URL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_IDLE: u32 = 2;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BIJOU")]
pub struct Settings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Without it the server runs on the
    /// in-memory store.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub db_max_connections: Option<u32>,
    /// Idle connections kept warm.
    pub db_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub db_connect_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving. Defaults to `true`.
    pub run_migrations: Option<bool>,
    /// Prefix joined with stored media paths in payloads.
    pub media_base_url: Option<String>,
}

/// Raised when a setting holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bind address {value:?}: {message}")]
pub struct InvalidBindAddr {
    value: String,
    message: String,
}

impl Settings {
    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBindAddr`] when the configured value is not a
    /// socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, InvalidBindAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| InvalidBindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Configured database URL, ignoring blank values.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size ceiling.
    #[must_use]
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Idle connections kept open, never above the pool ceiling.
    #[must_use]
    pub fn db_min_idle(&self) -> u32 {
        self.db_min_idle
            .unwrap_or(DEFAULT_MIN_IDLE)
            .min(self.db_max_connections())
    }

    /// Connection checkout timeout.
    #[must_use]
    pub fn db_connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.db_connect_timeout_secs
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }

    /// Whether embedded migrations run at startup.
    #[must_use]
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Media URL prefix.
    #[must_use]
    pub fn media_base_url(&self) -> &str {
        self.media_base_url
            .as_deref()
            .unwrap_or(DEFAULT_MEDIA_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "BIJOU_BIND_ADDR",
        "BIJOU_DATABASE_URL",
        "BIJOU_DB_MAX_CONNECTIONS",
        "BIJOU_DB_MIN_IDLE",
        "BIJOU_DB_CONNECT_TIMEOUT_SECS",
        "BIJOU_RUN_MIGRATIONS",
        "BIJOU_MEDIA_BASE_URL",
    ];

    fn load_from_empty_args() -> Settings {
        Settings::load_from_iter([OsString::from("bijou-backend")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal")
        );
        assert!(settings.database_url().is_none());
        assert_eq!(settings.db_max_connections(), 10);
        assert_eq!(settings.db_min_idle(), 2);
        assert_eq!(settings.db_connect_timeout(), Duration::from_secs(30));
        assert!(settings.run_migrations());
        assert_eq!(settings.media_base_url(), "/media/");
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("BIJOU_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "BIJOU_DATABASE_URL",
                Some("postgres://bijou@localhost/bijou".to_owned()),
            ),
            ("BIJOU_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("BIJOU_DB_MIN_IDLE", Some("8".to_owned())),
            ("BIJOU_DB_CONNECT_TIMEOUT_SECS", Some("5".to_owned())),
            ("BIJOU_RUN_MIGRATIONS", Some("false".to_owned())),
            (
                "BIJOU_MEDIA_BASE_URL",
                Some("https://cdn.example.org/media".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("override parses").port(),
            9000
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://bijou@localhost/bijou")
        );
        assert_eq!(settings.db_max_connections(), 4);
        assert_eq!(settings.db_min_idle(), 4);
        assert_eq!(settings.db_connect_timeout(), Duration::from_secs(5));
        assert!(!settings.run_migrations());
        assert_eq!(settings.media_base_url(), "https://cdn.example.org/media");
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some("true"), true)]
    #[case(Some("false"), false)]
    fn migrations_run_unless_disabled(#[case] raw: Option<&str>, #[case] expected: bool) {
        let _guard = lock_env([("BIJOU_RUN_MIGRATIONS", raw.map(str::to_owned))]);

        assert_eq!(load_from_empty_args().run_migrations(), expected);
    }

    #[rstest]
    fn malformed_bind_addr_is_reported() {
        let _guard = lock_env([("BIJOU_BIND_ADDR", Some("not-an-address".to_owned()))]);

        let settings = load_from_empty_args();
        let err = settings.bind_addr().expect_err("must not parse");
        assert!(err.to_string().contains("not-an-address"));
    }

    #[rstest]
    fn blank_database_url_counts_as_absent() {
        let _guard = lock_env([("BIJOU_DATABASE_URL", Some("   ".to_owned()))]);

        assert!(load_from_empty_args().database_url().is_none());
    }
}
