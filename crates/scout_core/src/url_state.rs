//! Pure codecs between a [`FilterSet`] and an address-bar query string.
//!
//! The IO side (whatever owns the actual address bar) lives behind the
//! app's param store; this module only encodes and decodes.

use url::form_urlencoded;

use crate::{FilterPatch, FilterSet, SortKey, SortOrder, DEFAULT_PER_PAGE};

/// Parses a query string (with or without a leading `?`) into a patch.
///
/// Empty values and unknown keys are skipped. Unparsable `page`/`perPage`
/// are ignored so the field keeps its default; star bounds stay raw and
/// surface as provider-level failures later if they are not numeric.
pub fn from_query_string(query: &str) -> FilterPatch {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut patch = FilterPatch::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            "q" => patch.free_text = Some(value.into_owned()),
            "language" => patch.language = Some(value.into_owned()),
            "minStars" => patch.min_stars = Some(value.into_owned()),
            "maxStars" => patch.max_stars = Some(value.into_owned()),
            "license" => patch.license = Some(value.into_owned()),
            "sort" => patch.sort = SortKey::from_param(&value),
            "order" => patch.order = SortOrder::from_param(&value),
            "page" => patch.page = value.parse().ok(),
            "perPage" => patch.per_page = value.parse().ok(),
            _ => {}
        }
    }

    patch
}

/// Serializes the filters, omitting every field equal to its default so
/// shared URLs stay minimal.
pub fn to_query_string(filters: &FilterSet) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !filters.free_text.is_empty() {
        serializer.append_pair("q", &filters.free_text);
    }
    if !filters.language.is_empty() {
        serializer.append_pair("language", &filters.language);
    }
    if !filters.min_stars.is_empty() {
        serializer.append_pair("minStars", &filters.min_stars);
    }
    if !filters.max_stars.is_empty() {
        serializer.append_pair("maxStars", &filters.max_stars);
    }
    if !filters.license.is_empty() {
        serializer.append_pair("license", &filters.license);
    }
    if filters.sort != SortKey::Stars {
        serializer.append_pair("sort", filters.sort.as_param());
    }
    if filters.order != SortOrder::Descending {
        serializer.append_pair("order", filters.order.as_param());
    }
    if filters.page != 1 {
        serializer.append_pair("page", &filters.page.to_string());
    }
    if filters.per_page != DEFAULT_PER_PAGE {
        serializer.append_pair("perPage", &filters.per_page.to_string());
    }

    serializer.finish()
}
