//! coglang-web — HTTP front end for the cognate store.
//! Provides:
//!   - JSON endpoints for random browsing, word search, and annotation editing
//!   - A server-rendered browse page driving those endpoints

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
