use scout_core::{total_pages, PROVIDER_PAGE_CAP};

#[test]
fn page_count_uses_ceiling_division() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(95, 10), 10);
    assert_eq!(total_pages(100, 25), 4);
}

#[test]
fn page_count_is_capped_by_provider_limit() {
    assert_eq!(total_pages(5000, 10), PROVIDER_PAGE_CAP);
    assert_eq!(total_pages(1_000_000, 100), PROVIDER_PAGE_CAP);
    // Just under the cap stays uncapped.
    assert_eq!(total_pages(990, 10), 99);
}
