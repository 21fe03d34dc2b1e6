//! Dedup and id assignment against the existing catalog.
//!
//! A candidate is already in the catalog when its link matches an existing
//! link exactly, or its `name|date` composite matches an existing pair.
//! Survivors keep their date-ascending input order and receive consecutive
//! ids continuing past the existing maximum, so chronological order and id
//! order agree for every run's additions. Existing entries are never
//! touched.

use std::collections::HashSet;

use crate::catalog::CatalogEntry;
use crate::synth::Candidate;

/// Filter out candidates already present and assign fresh ids to the rest.
///
/// Returns only the new entries; the caller appends them to the catalog.
pub fn merge(existing: &[CatalogEntry], candidates: Vec<Candidate>) -> Vec<CatalogEntry> {
    let seen_links: HashSet<&str> = existing.iter().map(|e| e.link.trim()).collect();
    let seen_name_dates: HashSet<String> = existing
        .iter()
        .map(|e| name_date_key(&e.name, &e.date))
        .collect();

    let mut next_id = existing.iter().map(|e| e.id + 1).max().unwrap_or(0);
    let mut fresh = Vec::new();
    for candidate in candidates {
        if seen_links.contains(candidate.link.trim()) {
            continue;
        }
        if seen_name_dates.contains(&name_date_key(&candidate.name, &candidate.date_string())) {
            continue;
        }
        fresh.push(candidate.into_entry(next_id));
        next_id += 1;
    }
    fresh
}

fn name_date_key(name: &str, date: &str) -> String {
    format!("{}|{}", name.trim(), date)
}
