//! # Utility Modules
//!
//! Cross-cutting helpers used throughout the application.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Application-wide limits and lifetimes
//! - **Telemetry** (`telemetry`) - Tracing subscriber assembly

pub mod constant;
pub mod telemetry;
