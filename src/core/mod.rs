//! Core module - shared infrastructure for Snapcap
//!
//! This module contains configuration and error handling used throughout
//! the application.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Result, SnapcapError};
