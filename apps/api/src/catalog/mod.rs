//! Static affiliate-product catalog and keyword lookup.
//!
//! The catalog is a compile-time table of curated high-conversion ClickBank
//! products grouped by niche category. Lookup is pure and deterministic:
//! the same skills text always returns the same records.

use serde::Serialize;

pub mod data;

/// Maximum records returned by a lookup, on any path.
pub const MAX_RESULTS: usize = 3;

/// Maximum records contributed by a single matched category.
const MAX_PER_CATEGORY: usize = 2;

/// One affiliate product. Defined statically, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductRecord {
    pub name: &'static str,
    /// Sale price in USD.
    pub price: f64,
    /// Affiliate commission as a percentage of the price, within [0, 100].
    pub commission_pct: f64,
    /// Popularity proxy — higher means more affiliates actively promoting.
    pub gravity: u32,
    pub url: &'static str,
}

/// A niche category: label, match synonyms, and its products in priority order.
pub struct Category {
    pub name: &'static str,
    /// Extra tokens that map free text to this category. The category name
    /// itself always matches and is not repeated here.
    pub synonyms: &'static [&'static str],
    pub products: &'static [ProductRecord],
}

/// Finds up to [`MAX_RESULTS`] products for a free-text skills description.
///
/// The input is lower-cased and categories are walked in catalog order. The
/// first category whose name appears as a substring of the input, or one of
/// whose synonym tokens does, contributes up to two records and ends the
/// walk — later categories are never unioned in, so "health and fitness"
/// resolves to the health category alone.
///
/// When nothing matches, the fallback flattens the whole catalog and takes
/// the top three by gravity (stable: ties keep catalog order). Absence of a
/// match is not an error.
pub fn find_products(skills: &str) -> Vec<ProductRecord> {
    let needle = skills.to_lowercase();

    let mut found: Vec<ProductRecord> = Vec::new();
    for category in data::CATEGORIES {
        let name_hit = needle.contains(category.name);
        let synonym_hit = category.synonyms.iter().any(|token| needle.contains(token));
        if name_hit || synonym_hit {
            found.extend(category.products.iter().take(MAX_PER_CATEGORY).copied());
            break;
        }
    }

    if found.is_empty() {
        found = top_by_gravity(MAX_RESULTS);
    }

    found.truncate(MAX_RESULTS);
    found
}

/// Flattens the catalog and returns the `n` highest-gravity records,
/// descending, with catalog order preserved among equal gravities.
fn top_by_gravity(n: usize) -> Vec<ProductRecord> {
    let mut all: Vec<ProductRecord> = data::CATEGORIES
        .iter()
        .flat_map(|c| c.products.iter().copied())
        .collect();
    all.sort_by(|a, b| b.gravity.cmp(&a.gravity)); // sort_by is stable
    all.truncate(n);
    all
}
