//! Instagram media models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single media item from the connected Instagram account.
///
/// Field set mirrors the Graph API projection the backend forwards:
/// `id,caption,media_type,media_url,permalink,thumbnail_url,timestamp`.
/// Everything except the id and type is optional — stories and expired
/// media routinely omit URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub media_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// The media listing for the connected account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFeed {
    pub media: Vec<MediaItem>,
    /// How many items the backend stored for the first time on this fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_media_stored: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_feed_with_sparse_items() {
        let feed: MediaFeed = serde_json::from_value(serde_json::json!({
            "media": [
                {
                    "id": "179000000001",
                    "caption": "handmade mugs, new batch",
                    "media_type": "IMAGE",
                    "media_url": "https://cdn.example/1.jpg",
                    "permalink": "https://www.instagram.com/p/abc/",
                    "timestamp": "2024-11-02T09:30:00Z"
                },
                { "id": "179000000002", "media_type": "VIDEO" }
            ],
            "new_media_stored": 1
        }))
        .unwrap();

        assert_eq!(feed.media.len(), 2);
        assert_eq!(feed.new_media_stored, Some(1));
        assert!(feed.media[0].timestamp.is_some());
        assert!(feed.media[1].media_url.is_none());
    }
}
