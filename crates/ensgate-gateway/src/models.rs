//! Wire shapes of gateway requests and responses.

use serde::{Deserialize, Serialize};

/// JSON body sent to `POST` gateways.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayPostBody {
    /// Call data as lowercase `0x` hex
    pub data: String,
    /// Redirecting contract as lowercase `0x` hex
    pub sender: String,
}

/// JSON body returned by a gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayBody {
    /// Payload as `0x` hex
    pub data: String,
}

/// A fully expanded gateway request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreparedRequest {
    /// Template contained `{data}`.
    Get(url::Url),
    /// Template without `{data}`: the values travel in the body.
    Post(url::Url, GatewayPostBody),
}

impl PreparedRequest {
    pub const fn url(&self) -> &url::Url {
        match self {
            Self::Get(url) | Self::Post(url, _) => url,
        }
    }
}
