use segment_router_rs::{CaptureTypes, Route, Router, parse_template};

const SUFFIXES: [&str; 7] = ["", "/", "?a=b", "/?a=b", "?a=b/", "/?a=b/", "??"];

fn build_router() -> Router<&'static str> {
    let types = CaptureTypes::default();
    let route = |name: &str, template: &str, target: &'static str| {
        Route::new(
            name,
            parse_template(template, &types).expect("template should parse"),
            target,
        )
    };

    Router::new([
        route("home", "/", "home-handler"),
        route("about", "/about", "about-handler"),
        route("post-list", "/posts/", "post-list-handler"),
        route("post", "/posts/{id:int}", "post-handler"),
        route("nested", "/a/b/c", "nested-handler"),
    ])
    .expect("router should build")
}

#[test]
fn router_when_root_requested_then_matches_home_with_empty_captures() {
    let router = build_router();

    for path in ["/", "/?a=b", "/?a=b/", "/??"] {
        let matched = router.find(path).expect("root should match");
        assert_eq!(matched.name(), "home");
        assert_eq!(*matched.target(), "home-handler");
        assert!(matched.captures.is_empty());
    }
}

#[test]
fn router_when_root_has_extra_slash_then_returns_none() {
    let router = build_router();

    assert!(router.find("//").is_none());
    assert!(router.find("//?a=b").is_none());
}

#[test]
fn router_when_static_path_has_optional_suffix_then_matches() {
    let router = build_router();

    for suffix in SUFFIXES {
        let about = router
            .find(&format!("/about{suffix}"))
            .expect("about should match");
        assert_eq!(about.name(), "about");
        assert!(about.captures.is_empty());

        let list = router
            .find(&format!("/posts{suffix}"))
            .expect("post list should match");
        assert_eq!(list.name(), "post-list");
        assert!(list.captures.is_empty());

        let nested = router
            .find(&format!("/a/b/c{suffix}"))
            .expect("nested should match");
        assert_eq!(nested.name(), "nested");
    }
}

#[test]
fn router_when_static_path_has_two_trailing_slashes_then_returns_none() {
    let router = build_router();

    assert!(router.find("/about//").is_none());
    assert!(router.find("/posts//").is_none());
    assert!(router.find("/a/b/c//").is_none());
}

#[test]
fn router_when_path_differs_in_case_or_encoding_then_returns_none() {
    let router = build_router();

    assert!(router.find("/About").is_none());
    assert!(router.find("/%61bout").is_none());
    assert!(router.find("/a//b/c").is_none());
}

#[test]
fn router_when_only_static_routes_then_builds_without_dynamic_expression() {
    let types = CaptureTypes::default();
    let router = Router::new([
        Route::bare("home", parse_template("/", &types).unwrap()),
        Route::bare("about", parse_template("/about", &types).unwrap()),
    ])
    .expect("router should build");

    assert!(router.dynamic_source().is_none());
    assert_eq!(router.find("/about").map(|m| m.name()), Some("about"));
    assert!(router.find("/missing").is_none());
    assert!(router.find("//").is_none());
}

#[test]
fn router_when_two_routes_share_a_static_path_then_last_declared_wins() {
    let types = CaptureTypes::default();
    let router = Router::new([
        Route::bare("first", parse_template("/same", &types).unwrap()),
        Route::bare("second", parse_template("/same/", &types).unwrap()),
    ])
    .expect("router should build");

    assert_eq!(router.find("/same").map(|m| m.name()), Some("second"));
    assert_eq!(router.find("/same/").map(|m| m.name()), Some("second"));
    assert_eq!(router.reverse("first", &[]).unwrap(), "/same");
    assert_eq!(router.reverse("second", &[]).unwrap(), "/same/");
}
