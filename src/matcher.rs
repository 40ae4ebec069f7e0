//! Destination Matcher
//!
//! Pure keyword-to-results logic over an in-memory catalog. The matcher
//! never performs I/O and never mutates the catalog; callers are expected
//! to hand it an already trimmed and lower-cased keyword.

use crate::models::{Catalog, Destination, FlatCatalog, GroupedCatalog, SearchType};

/// Result of one matcher invocation: the matched destinations in
/// insertion order (duplicates across categories allowed) and the tag
/// describing which branch produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub search_type: SearchType,
    pub results: Vec<Destination>,
}

/// Run the matcher appropriate for the catalog shape.
///
/// The flat shape has no category branches, so its outcome is always
/// tagged [`SearchType::Specific`].
#[must_use]
pub fn match_keyword(catalog: &Catalog, keyword: &str) -> MatchOutcome {
    match catalog {
        Catalog::Grouped(grouped) => match_grouped(grouped, keyword),
        Catalog::Flat(flat) => MatchOutcome {
            search_type: SearchType::Specific,
            results: match_flat(flat, keyword),
        },
    }
}

/// Match against the grouped catalog shape.
///
/// Category keywords return a category verbatim; anything else is a
/// case-insensitive substring scan over country names, beach names and
/// temple names, concatenated in that order.
#[must_use]
pub fn match_grouped(catalog: &GroupedCatalog, keyword: &str) -> MatchOutcome {
    match keyword {
        "beach" | "beaches" => MatchOutcome {
            search_type: SearchType::Beaches,
            results: catalog.beaches.clone(),
        },
        "temple" | "temples" => MatchOutcome {
            search_type: SearchType::Temples,
            results: catalog.temples.clone(),
        },
        "country" | "countries" => MatchOutcome {
            search_type: SearchType::Countries,
            results: all_cities(catalog),
        },
        _ => MatchOutcome {
            search_type: SearchType::Specific,
            results: match_free_text(catalog, keyword),
        },
    }
}

/// Every country's cities, preserving country order then city order
fn all_cities(catalog: &GroupedCatalog) -> Vec<Destination> {
    catalog
        .countries
        .iter()
        .flat_map(|country| country.cities.iter().cloned())
        .collect()
}

/// Free-text scan: countries' cities first, then beaches, then temples
fn match_free_text(catalog: &GroupedCatalog, keyword: &str) -> Vec<Destination> {
    let mut results = Vec::new();

    for country in &catalog.countries {
        if country.name.to_lowercase().contains(keyword) {
            results.extend(country.cities.iter().cloned());
        }
    }

    for beach in &catalog.beaches {
        if beach.name.to_lowercase().contains(keyword) {
            results.push(beach.clone());
        }
    }

    for temple in &catalog.temples {
        if temple.name.to_lowercase().contains(keyword) {
            results.push(temple.clone());
        }
    }

    results
}

/// Match against the flat catalog shape: a destination is included when
/// any of its type labels equals the keyword, or its country equals the
/// keyword (case-insensitive exact match, not substring).
#[must_use]
pub fn match_flat(catalog: &FlatCatalog, keyword: &str) -> Vec<Destination> {
    catalog
        .destinations
        .iter()
        .filter(|destination| {
            destination
                .types
                .iter()
                .any(|label| label.eq_ignore_ascii_case(keyword))
                || destination
                    .country
                    .as_deref()
                    .is_some_and(|country| country.eq_ignore_ascii_case(keyword))
        })
        .cloned()
        .collect()
}
