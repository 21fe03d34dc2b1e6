//! CLI output formatting.
//!
//! Information-first display: each new album is shown by its semantic
//! identity — positional index, name, date — with the deep link indented
//! underneath as context. Each concern has a `format_*` function returning
//! lines (pure, testable) and a thin `print_*` wrapper that writes stdout.

use crate::catalog::CatalogEntry;
use crate::crawl::FolderListing;
use crate::remote;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{pos:0>3}")
}

/// Crawl summary: folder and direct-image counts.
///
/// ```text
/// Crawled 4 folders (12 images in 2 albums)
/// ```
pub fn format_crawl_summary(listing: &FolderListing) -> Vec<String> {
    let image_counts: Vec<usize> = listing
        .values()
        .map(|items| items.iter().filter(|i| remote::is_image(i)).count())
        .collect();
    let albums = image_counts.iter().filter(|&&n| n > 0).count();
    let images: usize = image_counts.iter().sum();
    vec![format!(
        "Crawled {} folders ({images} images in {albums} albums)",
        listing.len()
    )]
}

/// New entries, one header line plus an indented link each.
///
/// ```text
/// New albums (2)
/// 001 Trip 2020 (04.07.2020)
///     Link: https://disk.yandex.ru/d/abc?path=%2FTrip%202020
/// 002 09.05 parade (09.05.2021)
///     Link: https://disk.yandex.ru/d/abc?path=%2F09.05%20parade
/// ```
pub fn format_new_entries(entries: &[CatalogEntry]) -> Vec<String> {
    let mut lines = vec![format!("New albums ({})", entries.len())];
    for (pos, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(pos + 1),
            entry.name,
            entry.date
        ));
        lines.push(format!("    Link: {}", entry.link));
    }
    lines
}

pub fn print_crawl_summary(listing: &FolderListing) {
    for line in format_crawl_summary(listing) {
        println!("{line}");
    }
}

pub fn print_new_entries(entries: &[CatalogEntry]) {
    for line in format_new_entries(entries) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{dir, file, listing_of};

    fn entry(name: &str, date: &str, link: &str) -> CatalogEntry {
        CatalogEntry {
            id: 0,
            year: date[6..].into(),
            month: date[3..5].into(),
            day: date[..2].into(),
            name: name.into(),
            link: link.into(),
            date: date.into(),
            common: false,
            coordinates: [0.0, 0.0],
        }
    }

    #[test]
    fn crawl_summary_counts_only_image_bearing_folders_as_albums() {
        let listing = listing_of(&[
            ("/", vec![dir("Trip", "/Trip")]),
            (
                "/Trip",
                vec![
                    file("a.jpg", None, Some("image")),
                    file("b.jpg", None, Some("image")),
                    file("notes.txt", None, None),
                ],
            ),
        ]);
        assert_eq!(
            format_crawl_summary(&listing),
            vec!["Crawled 2 folders (2 images in 1 albums)"]
        );
    }

    #[test]
    fn new_entries_show_index_name_date_and_link() {
        let lines = format_new_entries(&[
            entry("Trip", "15.03.2021", "https://x/a"),
            entry("Parade", "09.05.2022", "https://x/b"),
        ]);
        assert_eq!(
            lines,
            vec![
                "New albums (2)",
                "001 Trip (15.03.2021)",
                "    Link: https://x/a",
                "002 Parade (09.05.2022)",
                "    Link: https://x/b",
            ]
        );
    }

    #[test]
    fn no_entries_is_just_the_header() {
        assert_eq!(format_new_entries(&[]), vec!["New albums (0)"]);
    }
}
