use super::*;

#[test]
fn route_paths_match_app_router() {
    assert_eq!(Route::Home.path(), "/");
    assert_eq!(Route::Auth.path(), "/auth");
    assert_eq!(Route::Dashboard.path(), "/dashboard");
    assert_eq!(Route::Auth.to_string(), "/auth");
}

#[test]
fn from_path_round_trips_known_routes() {
    for route in [Route::Home, Route::Auth, Route::Dashboard] {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
    assert_eq!(Route::from_path("/about"), None);
}

#[test]
fn memory_navigator_tracks_current_and_history() {
    let nav = MemoryNavigator::new(Route::Dashboard);
    assert_eq!(nav.current(), Route::Dashboard);
    nav.navigate(Route::Auth);
    assert_eq!(nav.current(), Route::Auth);
    assert_eq!(nav.history(), vec![Route::Dashboard, Route::Auth]);
}
