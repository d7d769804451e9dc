use serde::{Deserialize, Serialize};

/// One volume as returned by the books endpoint. Only the fields the
/// home page reads are modelled; everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: String,
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Response envelope. A missing `items` key means no matches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Option<Vec<BookSummary>>,
}

impl VolumesResponse {
    pub fn into_items(self) -> Vec<BookSummary> {
        self.items.unwrap_or_default()
    }
}

impl BookSummary {
    pub fn title(&self) -> &str {
        &self.volume_info.title
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.volume_info
            .image_links
            .as_ref()
            .and_then(|links| links.thumbnail.as_deref())
    }

    pub fn authors(&self) -> Option<&[String]> {
        self.volume_info.authors.as_deref()
    }
}
