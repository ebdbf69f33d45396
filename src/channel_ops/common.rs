//! Common utilities module
//!
//! This module contains shared utilities used across the channel operations.

pub mod error;

pub use error::{ChannelError, Result};
