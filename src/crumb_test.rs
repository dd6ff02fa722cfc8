use serde_json::{Value, json};

use super::*;

#[test]
fn new_crumb_has_absent_link_and_empty_options() {
    let crumb = Crumb::new("Home");
    assert_eq!(crumb.title(), "Home");
    assert!(crumb.link().is_absent());
    assert!(crumb.options().is_empty());
}

#[test]
fn bare_title_conversions_match_new() {
    assert_eq!(Crumb::from("Home"), Crumb::new("Home"));
    assert_eq!(Crumb::from("Home".to_owned()), Crumb::new("Home"));
}

#[test]
fn link_conversions_pick_the_right_variant() {
    assert_eq!(Link::from("/"), Link::Literal("/".to_owned()));
    assert_eq!(Link::from("/a".to_owned()), Link::Literal("/a".to_owned()));
    assert_eq!(Link::from(None::<&str>), Link::Absent);
    assert_eq!(Link::from(Some("/b")), Link::Literal("/b".to_owned()));

    let route = json!({"controller": "Some", "action": "text"})
        .as_object()
        .cloned()
        .expect("object");
    assert_eq!(Link::from(route.clone()), Link::Structured(route));
    assert_eq!(Link::default(), Link::Absent);
}

#[test]
fn with_option_overwrites_same_key() {
    let crumb = Crumb::new("Home")
        .with_option("class", "first")
        .with_option("class", "active");
    assert_eq!(crumb.options().get("class"), Some(&json!("active")));
    assert_eq!(crumb.options().len(), 1);
}

#[test]
fn with_options_replaces_instead_of_merging() {
    let mut replacement = Options::new();
    replacement.insert("id".to_owned(), json!("crumb-1"));

    let crumb = Crumb::new("Home")
        .with_option("class", "first")
        .with_options(replacement.clone());
    assert_eq!(crumb.options(), &replacement);
}

#[test]
fn serializes_to_title_link_options_shape() {
    let crumb = Crumb::new("Home").with_link("/").with_option("class", "first");
    let value = serde_json::to_value(&crumb).expect("serialize");
    assert_eq!(
        value,
        json!({"title": "Home", "link": "/", "options": {"class": "first"}})
    );

    let bare = serde_json::to_value(Crumb::new("Plain")).expect("serialize");
    assert_eq!(bare, json!({"title": "Plain", "link": null, "options": {}}));
}

#[test]
fn deserializes_each_link_shape() {
    let crumbs: Vec<Crumb> = serde_json::from_value(json!([
        {"title": "A", "link": "/a", "options": {}},
        {"title": "B", "link": {"controller": "B"}, "options": {"class": "x"}},
        {"title": "C", "link": null, "options": {}},
        {"title": "D"}
    ]))
    .expect("deserialize");

    assert_eq!(crumbs[0].link(), &Link::from("/a"));
    assert!(matches!(crumbs[1].link(), Link::Structured(map) if map.get("controller") == Some(&Value::from("B"))));
    assert_eq!(crumbs[1].options().get("class"), Some(&json!("x")));
    assert!(crumbs[2].link().is_absent());
    assert_eq!(crumbs[3], Crumb::new("D"));
}

#[test]
fn deserialize_rejects_non_link_values() {
    let result = serde_json::from_value::<Crumb>(json!({"title": "A", "link": 42}));
    assert!(result.is_err());
}
