//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use bijou_backend::inbound::http::state::MediaUrls;
use bijou_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) media: MediaUrls,
}

impl ServerConfig {
    /// Construct a configuration serving on `bind_addr` from the in-memory
    /// store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, media: MediaUrls) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            media,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, every port is served by its Diesel adapter.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
