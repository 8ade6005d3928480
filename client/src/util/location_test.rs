use super::*;

#[test]
fn href_and_view_for_agree_with_the_route_table() {
    let table = RouteTable::standard().unwrap();
    for view in [View::Landing, View::Auth, View::Dashboard, View::StreamerSetup, View::ViewerSetup] {
        assert_eq!(href(view), table.fragment(view));
        assert_eq!(view_for(href(view)), view);
    }
}

#[test]
fn view_for_unknown_fragment_is_landing() {
    assert_eq!(view_for("#pricing"), View::Landing);
    assert_eq!(view_for(""), View::Landing);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_reads_the_landing_view() {
    assert_eq!(current_fragment(), "");
    assert_eq!(current_view(), View::Landing);
}
