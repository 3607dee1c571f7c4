use super::*;

// =============================================================
// Shipped table
// =============================================================

#[test]
fn root_selects_homepage() {
    assert_eq!(match_route(ROUTES, "/"), Some(Page::Homepage));
}

#[test]
fn upload_selects_upload_page() {
    assert_eq!(match_route(ROUTES, "/upload"), Some(Page::Upload));
}

#[test]
fn unknown_paths_select_nothing() {
    for path in ["/other", "/upload/", "/upload/extra", "/uploads", "", "upload", "//"] {
        assert_eq!(match_route(ROUTES, path), None, "path {path:?}");
    }
}

#[test]
fn shipped_patterns_are_exact_and_distinct() {
    assert!(ROUTES.iter().all(|r| r.exact));
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.pattern, b.pattern);
        }
    }
}

#[test]
fn at_most_one_shipped_entry_matches_any_path() {
    for path in ["/", "/upload", "/other", "/upload/x"] {
        let hits = ROUTES.iter().filter(|r| r.matches(path)).count();
        assert!(hits <= 1, "path {path:?} matched {hits} entries");
    }
}

// =============================================================
// Generic matcher
// =============================================================

#[test]
fn first_match_wins_in_declaration_order() {
    let table = [
        RouteEntry { pattern: "/upload", exact: false, page: Page::Upload },
        RouteEntry { pattern: "/upload", exact: true, page: Page::Homepage },
    ];
    assert_eq!(match_route(&table, "/upload"), Some(Page::Upload));
}

#[test]
fn prefix_entry_respects_segment_boundary() {
    let entry = RouteEntry { pattern: "/upload", exact: false, page: Page::Upload };
    assert!(entry.matches("/upload"));
    assert!(entry.matches("/upload/batch"));
    assert!(!entry.matches("/uploads"));
    assert!(!entry.matches("/"));
}

#[test]
fn prefix_root_matches_every_absolute_path() {
    let entry = RouteEntry { pattern: "/", exact: false, page: Page::Homepage };
    assert!(entry.matches("/"));
    assert!(entry.matches("/anything/here"));
    assert!(!entry.matches("relative"));
}

#[test]
fn empty_table_matches_nothing() {
    assert_eq!(match_route(&[], "/"), None);
}
