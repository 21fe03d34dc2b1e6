//! Yandex.Disk public resources API transport.
//!
//! Implements [`Lister`] over the unauthenticated public API. One GET per
//! folder: `public_key` identifies the share, `path` selects the folder
//! (omitted for the root), `limit` caps the page size.
//!
//! Item paths arrive prefixed with `public:` (`public:/Trip/Nested`) and are
//! normalized to plain `/`-rooted paths before anything downstream sees them.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::remote::{ItemKind, ListError, Lister, RemoteItem};

const PUBLIC_API: &str = "https://cloud-api.yandex.net/v1/disk/public/resources";
const PAGE_LIMIT: u32 = 1000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// [`Lister`] for one public share, identified by its public URL or key.
pub struct YadiskLister {
    agent: ureq::Agent,
    public_key: String,
}

impl YadiskLister {
    pub fn new(public_key: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            agent,
            public_key: public_key.into(),
        }
    }

    fn request_url(&self, path: &str) -> String {
        let mut url = Url::parse(PUBLIC_API).expect("endpoint constant parses");
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("public_key", &self.public_key);
            // The API rejects an explicit path for the root listing.
            if path != "/" {
                query.append_pair("path", path);
            }
            query.append_pair("limit", &PAGE_LIMIT.to_string());
        }
        url.into()
    }
}

impl Lister for YadiskLister {
    fn list(&self, path: &str) -> Result<Vec<RemoteItem>, ListError> {
        let url = self.request_url(path);
        let response = self.agent.get(&url).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => ListError::Status(code),
            ureq::Error::Transport(t) => ListError::Transport(t.to_string()),
        })?;
        let listing: Listing = response
            .into_json()
            .map_err(|err| ListError::Body(err.to_string()))?;
        let items = listing.embedded.map(|e| e.items).unwrap_or_default();
        Ok(items.into_iter().map(ApiItem::into_remote).collect())
    }
}

#[derive(Deserialize)]
struct Listing {
    #[serde(rename = "_embedded")]
    embedded: Option<Embedded>,
}

#[derive(Deserialize)]
struct Embedded {
    #[serde(default)]
    items: Vec<ApiItem>,
}

#[derive(Deserialize)]
struct ApiItem {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
    modified: Option<String>,
    media_type: Option<String>,
}

impl ApiItem {
    fn into_remote(self) -> RemoteItem {
        let kind = if self.kind == "dir" {
            ItemKind::Dir
        } else {
            ItemKind::File
        };
        RemoteItem {
            path: normalize_path(&self.path),
            kind,
            modified: self.modified.as_deref().and_then(parse_modified),
            name: self.name,
            media_type: self.media_type,
        }
    }
}

/// `public:/Trip/Nested` → `/Trip/Nested`. Unrecognized timestamps become
/// `None` rather than failing the whole listing.
fn normalize_path(raw: &str) -> String {
    let stripped = raw.strip_prefix("public:").unwrap_or(raw);
    if stripped.starts_with('/') {
        stripped.to_string()
    } else {
        format!("/{stripped}")
    }
}

fn parse_modified(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn api_paths_are_normalized() {
        assert_eq!(normalize_path("public:/"), "/");
        assert_eq!(normalize_path("public:/Trip/Nested"), "/Trip/Nested");
        assert_eq!(normalize_path("/already/plain"), "/already/plain");
        assert_eq!(normalize_path("bare"), "/bare");
    }

    #[test]
    fn root_listing_omits_path_parameter() {
        let lister = YadiskLister::new("https://disk.yandex.ru/d/abc");
        let url = lister.request_url("/");
        assert!(!url.contains("path="));
        assert!(url.contains("public_key="));
        assert!(url.contains("limit=1000"));
    }

    #[test]
    fn subfolder_listing_carries_encoded_path() {
        let lister = YadiskLister::new("key");
        let url = lister.request_url("/Trip 2020");
        assert!(url.contains("path=%2FTrip+2020") || url.contains("path=%2FTrip%202020"));
    }

    #[test]
    fn listing_body_deserializes() {
        let body = r#"{
            "_embedded": {
                "items": [
                    {"name": "Nested", "path": "public:/Nested", "type": "dir"},
                    {"name": "a.jpg", "path": "public:/a.jpg", "type": "file",
                     "modified": "2020-07-04T10:00:00+00:00", "media_type": "image"}
                ]
            }
        }"#;
        let listing: Listing = serde_json::from_str(body).unwrap();
        let items: Vec<RemoteItem> = listing
            .embedded
            .unwrap()
            .items
            .into_iter()
            .map(ApiItem::into_remote)
            .collect();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, ItemKind::Dir);
        assert_eq!(items[0].path, "/Nested");
        assert_eq!(items[1].kind, ItemKind::File);
        assert_eq!(items[1].modified.unwrap().year(), 2020);
        assert_eq!(items[1].media_type.as_deref(), Some("image"));
    }

    #[test]
    fn missing_embedded_block_is_empty_listing() {
        let listing: Listing = serde_json::from_str("{}").unwrap();
        assert!(listing.embedded.is_none());
    }

    #[test]
    fn bad_timestamp_becomes_none() {
        assert!(parse_modified("not-a-date").is_none());
        assert!(parse_modified("2020-07-04T10:00:00+00:00").is_some());
    }
}
