//! Shared test utilities for the album-index test suite.
//!
//! Provides `RemoteItem` constructors, a `FolderListing` builder, and an
//! in-memory [`Lister`] so pipeline tests never touch the network.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::crawl::FolderListing;
use crate::remote::{ItemKind, ListError, Lister, RemoteItem};

// =========================================================================
// Item constructors
// =========================================================================

/// A file item. `modified` is an RFC 3339 string, `media_type` the declared
/// kind (`Some("image")` for service-classified images).
pub fn file(name: &str, modified: Option<&str>, media_type: Option<&str>) -> RemoteItem {
    RemoteItem {
        name: name.to_string(),
        path: format!("/{name}"),
        kind: ItemKind::File,
        modified: modified.map(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .expect("test timestamp parses")
                .with_timezone(&Utc)
        }),
        media_type: media_type.map(String::from),
    }
}

/// A directory item with an explicit normalized path.
pub fn dir(name: &str, path: &str) -> RemoteItem {
    RemoteItem {
        name: name.to_string(),
        path: path.to_string(),
        kind: ItemKind::Dir,
        modified: None,
        media_type: None,
    }
}

/// Build a [`FolderListing`] directly, bypassing the crawler.
pub fn listing_of(folders: &[(&str, Vec<RemoteItem>)]) -> FolderListing {
    folders
        .iter()
        .map(|(path, items)| (path.to_string(), items.clone()))
        .collect()
}

// =========================================================================
// In-memory Lister
// =========================================================================

/// Fake remote tree. Unknown paths answer 404, paths registered with
/// [`FakeLister::failing`] answer 500, and every call is counted.
pub struct FakeLister {
    folders: HashMap<String, Vec<RemoteItem>>,
    failures: HashSet<String>,
    calls: RefCell<HashMap<String, usize>>,
}

impl FakeLister {
    pub fn new() -> Self {
        FakeLister {
            folders: HashMap::new(),
            failures: HashSet::new(),
            calls: RefCell::new(HashMap::new()),
        }
    }

    pub fn folder(mut self, path: &str, items: Vec<RemoteItem>) -> Self {
        self.folders.insert(path.to_string(), items);
        self
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.failures.insert(path.to_string());
        self
    }

    pub fn call_count(&self, path: &str) -> usize {
        self.calls.borrow().get(path).copied().unwrap_or(0)
    }
}

impl Lister for FakeLister {
    fn list(&self, path: &str) -> Result<Vec<RemoteItem>, ListError> {
        *self.calls.borrow_mut().entry(path.to_string()).or_insert(0) += 1;
        if self.failures.contains(path) {
            return Err(ListError::Status(500));
        }
        self.folders
            .get(path)
            .cloned()
            .ok_or(ListError::Status(404))
    }
}
