//! coglang-common — Shared error types and request validation used across all Coglang crates.

pub mod error;
pub mod lang;

pub use error::ApiError;
