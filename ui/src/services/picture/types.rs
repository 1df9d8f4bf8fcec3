use serde::{Deserialize, Serialize};

/// Metadata returned by the picture host's `/id/{n}/info` endpoint.
/// Field names match the wire format, so no renames are needed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PictureMetadata {
    /// The host reports ids as strings.
    pub id: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub download_url: String,
}
