use crate::FilterSet;

/// Sentinel predicate so the provider never receives an empty `q`.
const FALLBACK_TERM: &str = "stars:>1";

/// Builds the provider search predicate from a filter set.
///
/// Pure and deterministic; predicate order is fixed: base term,
/// language, stars, license.
pub fn build_search_query(filters: &FilterSet) -> String {
    let text = filters.free_text.trim();
    let mut query = if text.is_empty() {
        FALLBACK_TERM.to_string()
    } else {
        text.to_string()
    };

    if !filters.language.is_empty() {
        query.push_str(&format!(" language:{}", filters.language));
    }

    let min = filters.min_stars.as_str();
    let max = filters.max_stars.as_str();
    match (min.is_empty(), max.is_empty()) {
        (false, false) => query.push_str(&format!(" stars:{min}..{max}")),
        (false, true) => query.push_str(&format!(" stars:>={min}")),
        (true, false) => query.push_str(&format!(" stars:<={max}")),
        (true, true) => {}
    }

    if !filters.license.is_empty() {
        query.push_str(&format!(" license:{}", filters.license));
    }

    query
}
