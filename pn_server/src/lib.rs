//! HTTP and WebSocket front-end for the poker night league.

pub mod api;
pub mod config;
pub mod logging;
