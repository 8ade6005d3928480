use super::*;

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolves_registered_fragments() {
    let table = RouteTable::standard().unwrap();
    assert_eq!(table.resolve("#dashboard"), View::Dashboard);
    assert_eq!(table.resolve("#streamer-setup"), View::StreamerSetup);
    assert_eq!(table.resolve("#viewer-setup"), View::ViewerSetup);
    assert_eq!(table.resolve("#auth"), View::Auth);
}

#[test]
fn unrecognized_fragments_fall_back_to_landing() {
    let table = RouteTable::standard().unwrap();
    for raw in ["", "#", "#settings", "#Dashboard", "dashboard", "#dashboard ", " #dashboard", "#dashboard/x", "#features"] {
        assert_eq!(table.resolve(raw), View::Landing, "expected landing for {raw:?}");
    }
}

#[test]
fn fragment_round_trips_through_resolve() {
    let table = RouteTable::standard().unwrap();
    for view in [View::Auth, View::Dashboard, View::StreamerSetup, View::ViewerSetup] {
        assert_eq!(table.resolve(table.fragment(view)), view);
    }
}

#[test]
fn landing_fragment_is_bare_hash() {
    let table = RouteTable::standard().unwrap();
    assert_eq!(table.fragment(View::Landing), "#");
    assert_eq!(table.resolve(table.fragment(View::Landing)), View::Landing);
}

#[test]
fn standard_table_is_built_once() {
    let first = RouteTable::standard().unwrap();
    let second = RouteTable::standard().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn default_view_is_landing() {
    assert_eq!(View::default(), View::Landing);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn standard_table_is_valid() {
    let table = RouteTable::standard().unwrap();
    assert_eq!(table.len(), STANDARD_ROUTES.len());
    assert!(!table.is_empty());
}

#[test]
fn rejects_fragment_without_hash() {
    let err = RouteTable::new(&[("dashboard", View::Dashboard)]).unwrap_err();
    assert_eq!(err, RouteTableError::MissingHash("dashboard".to_owned()));
}

#[test]
fn rejects_bare_hash() {
    let err = RouteTable::new(&[("#", View::Dashboard)]).unwrap_err();
    assert_eq!(err, RouteTableError::EmptyName);
}

#[test]
fn rejects_duplicate_fragment() {
    let err = RouteTable::new(&[("#a", View::Dashboard), ("#a", View::Auth)]).unwrap_err();
    assert_eq!(err, RouteTableError::DuplicateFragment("#a".to_owned()));
}

#[test]
fn rejects_duplicate_view() {
    let err = RouteTable::new(&[("#a", View::Dashboard), ("#b", View::Dashboard)]).unwrap_err();
    assert_eq!(err, RouteTableError::DuplicateView(View::Dashboard));
}

#[test]
fn rejects_landing_binding() {
    let err = RouteTable::new(&[("#home", View::Landing)]).unwrap_err();
    assert_eq!(err, RouteTableError::LandingBound("#home".to_owned()));
}

#[test]
fn empty_table_resolves_everything_to_landing() {
    let table = RouteTable::new(&[]).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.resolve("#dashboard"), View::Landing);
    assert_eq!(table.fragment(View::Dashboard), LANDING_FRAGMENT);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        RouteTableError::DuplicateFragment("#x".to_owned()).to_string(),
        "duplicate route fragment: #x"
    );
    assert_eq!(RouteTableError::EmptyName.to_string(), "route fragment has no name");
}
