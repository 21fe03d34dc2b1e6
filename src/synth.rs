//! Candidate entry synthesis.
//!
//! Turns the crawl result into catalog candidates. A folder qualifies when
//! it directly contains at least one image file — subfolders' images never
//! count toward the parent, and the share root never becomes an album. Each
//! qualifying folder yields exactly one candidate regardless of how many
//! images or nested folders it holds.
//!
//! Missing date fields default here (current UTC year, month 1, day 1), so
//! everything downstream sees fully-resolved dates.

use chrono::{Datelike, Utc};

use crate::catalog::CatalogEntry;
use crate::crawl::FolderListing;
use crate::dates;
use crate::remote::{self, RemoteItem};

/// Fallback coordinates, adjusted by hand in the catalog afterwards.
pub const DEFAULT_COORDINATES: [f64; 2] = [60.617597, 56.903951];

/// Run-wide values copied verbatim onto every synthesized entry.
#[derive(Debug, Clone, Copy)]
pub struct RunDefaults {
    pub coordinates: [f64; 2],
    pub common: bool,
}

impl Default for RunDefaults {
    fn default() -> Self {
        RunDefaults {
            coordinates: DEFAULT_COORDINATES,
            common: false,
        }
    }
}

/// A catalog entry before dedup and id assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub name: String,
    pub link: String,
    pub common: bool,
    pub coordinates: [f64; 2],
}

impl Candidate {
    /// The `dd.mm.yyyy` rendering used both in the entry and as half of the
    /// dedup identity.
    pub fn date_string(&self) -> String {
        format!("{:02}.{:02}.{}", self.day, self.month, self.year)
    }

    pub fn into_entry(self, id: u64) -> CatalogEntry {
        let date = self.date_string();
        CatalogEntry {
            id,
            year: self.year.to_string(),
            month: format!("{:02}", self.month),
            day: format!("{:02}", self.day),
            name: self.name,
            link: self.link,
            date,
            common: self.common,
            coordinates: self.coordinates,
        }
    }
}

/// Build one candidate per qualifying folder, sorted ascending by date.
pub fn synthesize(
    listing: &FolderListing,
    public_url: &str,
    defaults: &RunDefaults,
) -> Vec<Candidate> {
    let current_year = Utc::now().year();
    let mut candidates = Vec::new();

    for (folder, items) in listing {
        // The root is the gallery itself, never an album.
        if folder == "/" {
            continue;
        }
        let images: Vec<&RemoteItem> = items.iter().filter(|i| remote::is_image(i)).collect();
        if images.is_empty() {
            continue;
        }

        let name = folder_name(folder);
        let parts = dates::infer(&name, &images);
        candidates.push(Candidate {
            year: parts.year.unwrap_or(current_year),
            month: parts.month.unwrap_or(1),
            day: parts.day.unwrap_or(1),
            link: build_link(public_url, folder),
            name,
            common: defaults.common,
            coordinates: defaults.coordinates,
        });
    }

    candidates.sort_by_key(|c| (c.year, c.month, c.day));
    candidates
}

/// Last path segment, or `Untitled` for degenerate paths.
pub fn folder_name(path: &str) -> String {
    path.split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .unwrap_or("Untitled")
        .to_string()
}

/// Deep link to a folder on the share.
///
/// The root reference is returned unchanged for the root itself; subfolders
/// get a percent-encoded `path` query parameter, appended with `&` when the
/// reference already carries a query string.
pub fn build_link(public_url: &str, folder: &str) -> String {
    if folder.is_empty() || folder == "/" {
        return public_url.to_string();
    }
    let separator = if public_url.contains('?') { '&' } else { '?' };
    format!(
        "{public_url}{separator}path={}",
        urlencoding::encode(folder)
    )
}
