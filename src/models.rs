//! Frontend Models
//!
//! Data structures matching the dares API.

use serde::Deserialize;

/// Form value sent with every like request
pub const LIKE_INCREMENT: u32 = 1;

/// Dare data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dare {
    pub id: u32,
    pub title: String,
    /// Body text. Older servers call this field `text`.
    #[serde(alias = "text")]
    pub dare: String,
    pub likes: u32,
    #[serde(rename = "addedBy", default)]
    pub added_by: Option<String>,
}

/// Body of a like response.
///
/// The server either returns the whole refreshed collection or just the
/// dare that was liked; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LikeResponse {
    Collection(Vec<Dare>),
    Item(Dare),
}
