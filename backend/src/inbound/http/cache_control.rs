//! Shared cache-control policies for HTTP handlers.

/// Translation bundles may be cached by any intermediary for five minutes.
pub const PUBLIC_FIVE_MINUTES: &str = "public, max-age=300";

/// Probe responses must never be served from a cache.
pub const NO_STORE: &str = "no-store";
