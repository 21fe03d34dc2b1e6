//! # Album Index
//!
//! Builds a flat catalog of photo albums from a public Yandex.Disk folder
//! tree. Every folder that directly contains image files becomes one catalog
//! entry: a dated, deep-linked record ready for a gallery index. New entries
//! are deduplicated against the existing catalog and appended with fresh ids.
//!
//! # Architecture: Crawl → Infer → Synthesize → Merge
//!
//! The run is a four-stage pipeline over immutable intermediate data:
//!
//! ```text
//! 1. Crawl       public folder  →  FolderListing   (path → direct children)
//! 2. Infer       folder + files →  DateParts       (best-effort calendar date)
//! 3. Synthesize  listing        →  Vec<Candidate>  (sorted ascending by date)
//! 4. Merge       catalog + candidates → new entries with fresh ids
//! ```
//!
//! Each stage is a pure function of its input (only the crawl touches the
//! network), so unit tests exercise the pipeline with an in-memory
//! [`remote::Lister`] and never open a socket.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`remote`] | `RemoteItem`/`Lister` abstraction and image classification |
//! | [`yadisk`] | `Lister` backed by the Yandex.Disk public resources API |
//! | [`crawl`] | Work-list traversal of the full folder tree |
//! | [`dates`] | Date inference from folder names and file timestamps |
//! | [`synth`] | Candidate entry construction: links, date rendering, defaults |
//! | [`catalog`] | `data.json` document model, load and save |
//! | [`merge`] | Dedup against the catalog and id assignment |
//! | [`output`] | CLI output formatting for crawl and merge results |
//!
//! # Design Decisions
//!
//! ## Work-List Traversal, Not Recursion
//!
//! The crawler keeps an explicit stack of pending paths plus a visited set.
//! Arbitrarily deep or wide share trees never risk call-stack depth, and the
//! visited set keeps the walk safe even if the remote hierarchy were to alias
//! a path twice. A failed listing skips one subtree and the crawl continues.
//!
//! ## One Listing In Flight
//!
//! Directory listings are requested sequentially with a blocking HTTP client.
//! The public API is rate-sensitive and the candidates are independent — an
//! explicit date sort before the merge makes traversal order irrelevant — so
//! concurrency would add failure modes without changing the result.
//!
//! ## Read Once, Compute, Write Once
//!
//! The catalog is loaded once, the merged document is computed immutably,
//! and a single write persists it (only with `--write`). Pre-existing
//! entries are never edited or reordered, which keeps the merge step a pure
//! function from `(existing, candidates)` to new entries.

pub mod catalog;
pub mod crawl;
pub mod dates;
pub mod merge;
pub mod output;
pub mod remote;
pub mod synth;
pub mod yadisk;

#[cfg(test)]
pub(crate) mod test_helpers;
