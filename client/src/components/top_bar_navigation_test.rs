use super::*;
use crate::routing::{ROUTES, match_route};

#[test]
fn every_nav_link_points_at_a_routed_page() {
    for (label, href) in NAV_LINKS {
        assert!(match_route(ROUTES, href).is_some(), "{label} -> {href} has no route");
    }
}

#[test]
fn every_routed_page_has_a_nav_link() {
    for route in ROUTES {
        assert!(
            NAV_LINKS.iter().any(|(_, href)| *href == route.pattern),
            "route {} is not reachable from the navigation bar",
            route.pattern
        );
    }
}

#[test]
fn sign_out_clears_the_document_cache() {
    use crate::net::types::{DocumentSummary, User};

    let owner = Owner::new();
    owner.with(|| {
        let mut signed_in = AuthState::default();
        signed_in.resolve(Some(User { id: "u1".into(), name: "Ann".into(), email: None }));
        let auth = RwSignal::new(signed_in);

        let mut cached = DocumentsState::default();
        cached.replace(vec![DocumentSummary {
            id: "d1".into(),
            name: "a.txt".into(),
            content_type: "text/plain".into(),
            size: 1,
            created_at: "2026-01-01T00:00:00Z".into(),
        }]);
        let docs = RwSignal::new(cached);

        end_session(auth, docs);

        let docs = docs.get_untracked();
        assert!(docs.items.is_empty());
        assert!(!docs.loaded, "next session must refetch");
        assert!(auth.get_untracked().user.is_none());
    });
}
