//! Date inference for album folders.
//!
//! A folder's calendar date comes from two independent sources, merged by a
//! strict priority chain:
//!
//! 1. **Folder name** — patterns tried in order: `dd.mm.yyyy`, `yyyy.mm.dd`,
//!    `dd.mm` (separators `.`, `-`, `_`, matched anywhere in the name).
//!    A full match wins outright.
//! 2. **Newest image file** — the most recent `modified` timestamp among the
//!    folder's direct images, rendered as a UTC calendar date.
//! 3. **Merge** — a name that supplied only day+month borrows the year from
//!    the newest file; a name that supplied nothing takes the full file date.
//!
//! The result may still be partial (or empty). Filling the gaps with run
//! defaults is the synthesizer's job, not this module's.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use crate::remote::RemoteItem;

/// A partially-known calendar date. Any subset of fields may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateParts {
    pub year: Option<i32>,
    /// 1–12.
    pub month: Option<u32>,
    /// 1–31.
    pub day: Option<u32>,
}

impl DateParts {
    pub fn is_full(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }
}

// Matches are digit-bounded rather than word-bounded so that a date followed
// by `_` (a word character) still counts: `15.03.2021_trip` must match.
static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])(\d{2})[._-](\d{2})[._-](\d{4})(?:[^0-9]|$)").expect("valid pattern")
});
static YEAR_MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])(\d{4})[._-](\d{2})[._-](\d{2})(?:[^0-9]|$)").expect("valid pattern")
});
static DAY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])(\d{2})[._-](\d{2})(?:[^0-9]|$)").expect("valid pattern")
});

/// Extract date parts from a folder name.
///
/// Patterns are tried in the documented order against the lowercased name;
/// a hit whose month or day is out of range is discarded and the next
/// pattern gets its chance. Returns `None` when nothing sensible matches.
pub fn parse_name_date(name: &str) -> Option<DateParts> {
    let name = name.to_lowercase();

    if let Some(caps) = DAY_MONTH_YEAR.captures(&name) {
        let (day, month, year) = (num(&caps, 1), num(&caps, 2), num(&caps, 3));
        if plausible(month, day) {
            return Some(DateParts {
                year: Some(year as i32),
                month: Some(month),
                day: Some(day),
            });
        }
    }

    if let Some(caps) = YEAR_MONTH_DAY.captures(&name) {
        let (year, month, day) = (num(&caps, 1), num(&caps, 2), num(&caps, 3));
        if plausible(month, day) {
            return Some(DateParts {
                year: Some(year as i32),
                month: Some(month),
                day: Some(day),
            });
        }
    }

    if let Some(caps) = DAY_MONTH.captures(&name) {
        let (day, month) = (num(&caps, 1), num(&caps, 2));
        if plausible(month, day) {
            // Year unknown — filled from file timestamps, or run defaults.
            return Some(DateParts {
                year: None,
                month: Some(month),
                day: Some(day),
            });
        }
    }

    None
}

/// UTC calendar date of the most recently modified image, if any carries a
/// timestamp. Ties are broken arbitrarily.
pub fn newest_image_date(images: &[&RemoteItem]) -> Option<DateParts> {
    images
        .iter()
        .filter_map(|item| item.modified)
        .max()
        .map(|dt| DateParts {
            year: Some(dt.year()),
            month: Some(dt.month()),
            day: Some(dt.day()),
        })
}

/// Best-effort date for a folder, per the priority chain above.
///
/// Returns the default (all-`None`) parts when neither source yields
/// anything.
pub fn infer(folder_name: &str, images: &[&RemoteItem]) -> DateParts {
    let from_name = parse_name_date(folder_name);
    if let Some(parts) = from_name
        && parts.is_full()
    {
        // Full name match: the name wins over every timestamp.
        return parts;
    }
    let from_files = newest_image_date(images);
    match (from_name, from_files) {
        // Name supplied day+month; the newest file supplies the year.
        (Some(parts), Some(newest)) if parts.year.is_none() => DateParts {
            year: newest.year,
            ..parts
        },
        // Nothing in the name; the newest file date stands alone.
        (None, Some(newest)) => newest,
        // Whatever partial information the name gave (no files to help).
        (Some(parts), _) => parts,
        (None, None) => DateParts::default(),
    }
}

fn num(caps: &regex::Captures<'_>, group: usize) -> u32 {
    // Groups are 2–4 digit runs; the parse cannot fail.
    caps[group].parse().unwrap_or(0)
}

fn plausible(month: u32, day: u32) -> bool {
    (1..=12).contains(&month) && (1..=31).contains(&day)
}
