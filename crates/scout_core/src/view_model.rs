use crate::{FilterSet, SearchHit};

/// The provider refuses to paginate past this many pages, regardless of
/// how many records matched.
pub const PROVIDER_PAGE_CAP: u32 = 100;

/// Read-only snapshot consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchViewModel {
    pub filters: FilterSet,
    pub hits: Vec<SearchHit>,
    pub total_count: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub has_searched: bool,
    pub total_pages: u32,
    pub dirty: bool,
}

/// Derived page count: ceiling division, then the provider cap.
pub fn total_pages(total_count: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(u64::from(per_page));
    pages.min(u64::from(PROVIDER_PAGE_CAP)) as u32
}
