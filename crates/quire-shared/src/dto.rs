//! Data Transfer Objects - typed request payloads.

use serde::{Deserialize, Serialize};

/// Query string of the post listing.
///
/// `page` stays raw text; coercion to a page number belongs to the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl ListQuery {
    /// Build from decoded query pairs. A repeated `page` keeps its first value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let page = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "page").then_some(value));
        Self { page }
    }
}

/// Urlencoded body of the submission form. Missing fields are `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}
