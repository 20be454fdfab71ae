//! DTOs for the create endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::CreatedLink;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequest {
    /// The original URL to shorten (absolute HTTP/HTTPS).
    #[validate(length(min = 1, max = 8192, message = "URL must be 1-8192 characters"))]
    pub url: String,
}

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// A freshly created short link.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub key: String,
    pub long_url: String,
    pub short_url: String,
}

impl From<CreatedLink> for CreateResponse {
    fn from(link: CreatedLink) -> Self {
        Self {
            key: link.key,
            long_url: link.long_url,
            short_url: link.short_url,
        }
    }
}
