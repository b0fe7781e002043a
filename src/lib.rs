//! A personal portfolio with a gated AI assistant.
//!
//! The core state lives in plain modules with no framework types: the
//! access gate, the time-aware theme engine, the chat session reducer,
//! and the streaming assistant client. The Dioxus shell in [`ui`] is a
//! thin layer that renders snapshots of that state and feeds events back
//! in, and only compiles when a platform feature is enabled.

pub mod access;
pub mod activity;
pub mod assistant;
pub mod data;
pub mod session;
pub mod storage;
pub mod theme;
pub mod types;

#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod ui;
#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod views;
