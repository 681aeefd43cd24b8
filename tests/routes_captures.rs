use segment_router_rs::{CaptureTypes, CaptureValue, Route, Router, parse_template};

const SUFFIXES: [&str; 7] = ["", "/", "?a=b", "/?a=b", "?a=b/", "/?a=b/", "??"];

const IDS: [(&str, u64); 3] = [("1", 1), ("20", 20), ("822709461058169", 822_709_461_058_169)];

const NON_IDS: [&str; 12] = [
    "0",
    "-1",
    "\u{0661}",
    "1\u{0661}",
    "01",
    "1.",
    "1e1",
    "0x1",
    "9007199254740992",
    "Infinity",
    "-Infinity",
    "NaN",
];

const TEXT: [&str; 6] = ["a", " ", "\n", "\0", "string", "posts"];

fn build_router() -> Router {
    let types = CaptureTypes::default();
    let route = |name: &str, template: &str| {
        Route::bare(
            name,
            parse_template(template, &types).expect("template should parse"),
        )
    };

    Router::new([
        route("home", "/"),
        route("about", "/about"),
        route("post-list", "/posts/"),
        route("post", "/posts/{id:int}"),
        route("post-slug", "/posts/{id:int}/{slug}"),
        route("user", "/users/{username}"),
        route("items", "/items/{username}/"),
    ])
    .expect("router should build")
}

#[test]
fn router_when_integer_capture_valid_then_deserializes_value() {
    let router = build_router();

    for suffix in SUFFIXES {
        for (text, value) in IDS {
            let matched = router
                .find(&format!("/posts/{text}{suffix}"))
                .expect("id should match");
            assert_eq!(matched.name(), "post");
            assert_eq!(matched.captures.len(), 1);
            assert_eq!(
                matched.captures.get("id"),
                Some(&CaptureValue::Integer(value))
            );
        }
    }
}

#[test]
fn router_when_integer_capture_invalid_then_returns_none() {
    let router = build_router();

    for suffix in SUFFIXES {
        for text in NON_IDS {
            let path = format!("/posts/{text}{suffix}");
            assert!(router.find(&path).is_none(), "{path:?} should not match");
        }
    }

    assert!(router.find("/posts//").is_none());
    assert!(router.find("/posts/1234567890123456").is_none());
}

#[test]
fn router_when_text_capture_then_returns_raw_segment() {
    let router = build_router();

    for suffix in SUFFIXES {
        for text in TEXT {
            let user = router
                .find(&format!("/users/{text}{suffix}"))
                .expect("user should match");
            assert_eq!(user.name(), "user");
            assert_eq!(
                user.captures.get("username"),
                Some(&CaptureValue::Text(text.to_string()))
            );

            let items = router
                .find(&format!("/items/{text}{suffix}"))
                .expect("items should match");
            assert_eq!(items.name(), "items");
            assert_eq!(
                items.captures.get("username"),
                Some(&CaptureValue::Text(text.to_string()))
            );
        }
    }
}

#[test]
fn router_when_text_capture_empty_then_returns_none() {
    let router = build_router();

    for path in [
        "/users", "/users/", "/users//", "/items", "/items/", "/items//",
    ] {
        assert!(router.find(path).is_none(), "{path:?} should not match");
    }
}

#[test]
fn router_when_text_capture_not_decoded_then_keeps_percent_escapes() {
    let router = build_router();

    let matched = router.find("/users/J%C3%BCrgen").expect("should match");
    assert_eq!(matched.captures.get("username"), Some(&CaptureValue::from("J%C3%BCrgen")));
}

#[test]
fn router_when_combined_captures_then_returns_all_in_order() {
    let router = build_router();

    for suffix in SUFFIXES {
        for (id_text, id_value) in IDS {
            for text in TEXT {
                let matched = router
                    .find(&format!("/posts/{id_text}/{text}{suffix}"))
                    .expect("post-slug should match");
                assert_eq!(matched.name(), "post-slug");

                let entries: Vec<(&str, &CaptureValue)> = matched.captures.iter().collect();
                assert_eq!(
                    entries,
                    vec![
                        ("id", &CaptureValue::Integer(id_value)),
                        ("slug", &CaptureValue::Text(text.to_string())),
                    ]
                );
            }
        }

        for non_id in NON_IDS {
            for text in TEXT {
                let path = format!("/posts/{non_id}/{text}{suffix}");
                assert!(router.find(&path).is_none(), "{path:?} should not match");
            }
        }

        for text in TEXT {
            let path = format!("/posts//{text}{suffix}");
            assert!(router.find(&path).is_none(), "{path:?} should not match");
        }
    }

    for (id_text, _) in IDS {
        assert!(router.find(&format!("/posts/{id_text}//")).is_none());
    }
    assert!(router.find("/posts///").is_none());
}

#[test]
fn router_when_documented_scenario_then_behaves_as_described() {
    let router = build_router();

    let post = router.find("/posts/20").expect("post should match");
    assert_eq!(post.name(), "post");
    assert_eq!(post.captures.values(), vec![CaptureValue::Integer(20)]);

    let slug = router
        .find("/posts/20/title?x=1")
        .expect("post-slug should match");
    assert_eq!(slug.name(), "post-slug");
    assert_eq!(slug.captures.get("id"), Some(&CaptureValue::Integer(20)));
    assert_eq!(slug.captures.get("slug"), Some(&CaptureValue::from("title")));

    assert!(router.find("/posts/01").is_none());
    assert!(router.find("/posts//title").is_none());
    assert_eq!(
        router
            .reverse("post-slug", &[20u64.into(), "title".into()])
            .unwrap(),
        "/posts/20/title"
    );
}

#[test]
fn router_when_query_appended_then_matches_like_bare_path() {
    let router = build_router();

    for path in ["/", "/about", "/posts/7", "/posts/7/x", "/users/u", "/nope"] {
        for query in ["?", "?a=b", "?a=/posts/1", "?x?y"] {
            let bare = router.find(path).map(|m| (m.name(), m.captures.values()));
            let queried = router
                .find(&format!("{path}{query}"))
                .map(|m| (m.name(), m.captures.values()));
            assert_eq!(bare, queried, "{path}{query}");
        }
    }
}
