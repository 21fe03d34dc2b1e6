//! Folder tree traversal.
//!
//! Walks the full remote tree from the share root with an explicit work-list
//! and a visited set — a cycle-safe graph walk with no recursion, so depth
//! and width of the share never threaten the call stack.
//!
//! A failed listing is non-fatal: the path is logged at WARN and its subtree
//! dropped. One unreadable folder must not abort the whole crawl.

use std::collections::{BTreeMap, HashSet};

use crate::remote::{Lister, RemoteItem};

/// Every reachable folder path mapped to its direct children.
/// Built once per crawl; read-only afterward.
pub type FolderListing = BTreeMap<String, Vec<RemoteItem>>;

/// Traverse the whole tree reachable from `/`.
///
/// Listings are requested one at a time; traversal order is unspecified
/// (candidates get an explicit date sort later, so it cannot matter).
pub fn crawl(lister: &dyn Lister) -> FolderListing {
    let mut pending = vec!["/".to_string()];
    let mut visited: HashSet<String> = HashSet::new();
    let mut listing = FolderListing::new();

    while let Some(path) = pending.pop() {
        if !visited.insert(path.clone()) {
            continue;
        }
        let items = match lister.list(&path) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "listing failed; skipping subtree");
                continue;
            }
        };
        for item in &items {
            if item.is_dir() {
                pending.push(item.path.clone());
            }
        }
        listing.insert(path, items);
    }

    listing
}
