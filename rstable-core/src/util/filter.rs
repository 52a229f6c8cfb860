use crate::entities::*;

/// Search terms shorter than this (in characters) do not filter.
pub const MIN_SEARCH_TERM_LEN: usize = 3;

pub fn is_active_search_term(search_term: &str) -> bool {
    search_term.chars().count() >= MIN_SEARCH_TERM_LEN
}

/// Select the restaurants whose name, address or comments
/// contain the search term, ignoring case.
///
/// The input order is preserved.
pub fn filter_restaurants<'a>(
    restaurants: &'a [Restaurant],
    search_term: &str,
) -> Vec<&'a Restaurant> {
    if !is_active_search_term(search_term) {
        return restaurants.iter().collect();
    }
    let needle = search_term.to_lowercase();
    restaurants
        .iter()
        .filter(|r| matches_search_term(r, &needle))
        .collect()
}

fn matches_search_term(r: &Restaurant, lowercase_needle: &str) -> bool {
    let contains = |s: &str| s.to_lowercase().contains(lowercase_needle);
    contains(&r.name) || contains(&r.address) || r.comments.as_deref().is_some_and(contains)
}
