//! Shared types, errors, and configuration for Spendwise.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Auth wire payloads and JWT claims
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtService, TokenConfig};
