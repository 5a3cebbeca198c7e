use web::domain::shared::{
    list_options::ListOptions,
    pagination::{PER_PAGE, PageRequest, compute_pagination, total_pages},
};

#[test]
fn page_request_defaults_are_safe_and_stable() {
    let p = PageRequest::default();
    assert_eq!(p.page(), 1);
    assert_eq!(p.per_page(), PER_PAGE);
    assert_eq!(p.offset(), 0);
}

#[test]
fn page_request_from_query_falls_back_to_first_page() {
    assert_eq!(PageRequest::from_query(None).page(), 1);
    assert_eq!(PageRequest::from_query(Some("0")).page(), 1);
    assert_eq!(PageRequest::from_query(Some("-4")).page(), 1);
    assert_eq!(PageRequest::from_query(Some("two")).page(), 1);
    assert_eq!(PageRequest::from_query(Some("3")).page(), 3);
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(47, 10), 5);
}

#[test]
fn paged_options_skip_earlier_pages() {
    let options = ListOptions::paged((), &PageRequest::new(3));
    assert_eq!(options.limit(), Some(PER_PAGE));
    assert_eq!(options.offset(), 2 * PER_PAGE);
}

#[test]
fn pagination_marks_current_page() {
    let view = compute_pagination(2, 5);
    assert_eq!(view.prev, Some(1));
    assert_eq!(view.next, Some(3));
    let current: Vec<i64> = view
        .links
        .iter()
        .filter(|l| l.current)
        .map(|l| l.number)
        .collect();
    assert_eq!(current, vec![2]);
}
