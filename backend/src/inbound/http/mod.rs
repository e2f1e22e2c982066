//! HTTP inbound adapter exposing the JSON API.

pub mod auth;
pub mod cache_control;
pub mod contact;
pub mod content;
pub mod error;
pub mod events;
pub mod extract;
pub mod health;
pub mod i18n;
pub mod routes;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;
pub mod volunteers;

pub use error::ApiResult;
