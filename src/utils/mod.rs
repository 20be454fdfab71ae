//! Utility functions for key handling and URL validation.
//!
//! - [`key_codec`] - Short key generation and validation
//! - [`url_validator`] - Long URL validation

pub mod key_codec;
pub mod url_validator;
