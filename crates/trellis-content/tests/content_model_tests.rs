//! Integration tests for content categories and content models.

use trellis_content::{
    Category, ElementSnapshot, Model, allows_child, categories_for, categories_in_context,
    is_paragraph_straddling, is_void, model_for, resolve_model, VOID_ELEMENTS,
};

// ========== categories_for ==========

#[test]
fn test_anchor_categories() {
    let categories = categories_for("a");
    assert!(categories.contains(&Category::Flow));
    assert!(categories.contains(&Category::Phrasing));
    assert!(categories.contains(&Category::Palpable));
    // Interactive only with href.
    assert!(!categories.contains(&Category::Interactive));
}

#[test]
fn test_unknown_tag_has_no_categories() {
    assert!(categories_for("blink").is_empty());
    assert!(categories_for("").is_empty());
}

#[test]
fn test_script_categories() {
    let categories = categories_for("script");
    assert!(categories.contains(&Category::Metadata));
    assert!(categories.contains(&Category::ScriptSupporting));
    assert!(categories.contains(&Category::SelectElementInnerContent));
    assert!(!categories.contains(&Category::Palpable));
}

#[test]
fn test_context_adds_to_static_categories() {
    let context = ElementSnapshot::new().with_attribute("controls", "");
    let categories = categories_in_context("video", &context);
    assert!(categories.contains(&Category::Embedded));
    assert!(categories.contains(&Category::Interactive));
    assert!(categories.is_superset(&categories_for("video")));
}

// ========== model_for ==========

#[test]
fn test_model_for_is_idempotent() {
    for tag in ["a", "div", "select", "img", "unknown-tag", "TITLE"] {
        assert_eq!(model_for(tag), model_for(tag));
    }
}

#[test]
fn test_void_elements_model_nothing() {
    assert_eq!(model_for("img"), Model::Nothing);
    assert_eq!(model_for("input"), Model::Nothing);
    assert_eq!(model_for("br"), Model::Nothing);
    for tag in VOID_ELEMENTS {
        assert!(is_void(tag));
        assert_eq!(model_for(tag), Model::Nothing, "{tag}");
    }
}

#[test]
fn test_anchor_is_transparent() {
    assert_eq!(model_for("a"), Model::Transparent);
    assert!(Model::Transparent.allows(Category::Flow));
    assert!(Model::Transparent.allows(Category::Phrasing));
    assert!(!Model::Transparent.allows(Category::Metadata));
}

#[test]
fn test_select_family() {
    let select = model_for("select");
    assert_eq!(
        select,
        Model::categories([Category::SelectElementInnerContent])
    );
    assert!(!select.allows(Category::Flow));
    assert!(!select.allows_text());
    assert!(select.allows_element("option"));
    assert!(select.allows_element("optgroup"));
    assert!(!select.allows_element("p"));

    assert!(model_for("optgroup").allows_element("option"));
    assert!(!model_for("optgroup").allows_element("optgroup"));
    assert!(model_for("option").allows_element("span"));
    assert!(!model_for("option").allows_element("button"));
}

#[test]
fn test_unknown_tag_defaults_to_flow() {
    assert_eq!(model_for("blink"), Model::flow());
    assert_eq!(model_for("my-widget"), Model::flow());
}

#[test]
fn test_case_insensitive_lookup() {
    assert_eq!(model_for("IMG"), Model::Nothing);
    assert_eq!(model_for("Select"), model_for("select"));
    assert_eq!(categories_for("SPAN"), categories_for("span"));
}

// ========== allows_child ==========

#[test]
fn test_paragraph_rejects_block_children() {
    assert!(allows_child("p", "span", ["body"]));
    assert!(!allows_child("p", "div", ["body"]));
    assert!(!allows_child("p", "p", ["body"]));
}

#[test]
fn test_transparent_parent_inherits_ancestor_model() {
    // <span><a><div> is invalid because the anchor inherits phrasing.
    assert!(!allows_child("a", "div", ["span", "body"]));
    // <div><a><div> is fine.
    assert!(allows_child("a", "div", ["div", "body"]));
    // A detached anchor is treated as flow content.
    assert!(allows_child("a", "div", Vec::<String>::new()));
}

#[test]
fn test_main_under_body_is_flow() {
    assert!(allows_child("body", "main", ["html"]));
    assert!(allows_child("div", "main", ["body", "html"]));
    // <article><main> is not hierarchically correct.
    assert!(!allows_child("article", "main", ["body", "html"]));
}

#[test]
fn test_area_allowed_below_map() {
    assert!(allows_child("p", "area", ["map", "body"]));
    assert!(allows_child("map", "area", ["body"]));
    assert!(!allows_child("p", "area", ["body"]));
}

#[test]
fn test_head_accepts_metadata_only() {
    assert!(allows_child("head", "title", ["html"]));
    assert!(allows_child("head", "meta", ["html"]));
    assert!(!allows_child("head", "div", ["html"]));
}

#[test]
fn test_void_parent_rejects_everything() {
    assert!(!allows_child("img", "span", ["div"]));
    assert!(!model_for("img").allows_text());
}

#[test]
fn test_resolve_through_transparent_chain() {
    let model = resolve_model("ins", ["del", "a", "h1"]);
    assert_eq!(model, Model::categories([Category::Phrasing]));
}

#[test]
fn test_paragraph_straddling() {
    for tag in ["a", "ins", "del", "map"] {
        assert!(is_paragraph_straddling(tag));
    }
    assert!(!is_paragraph_straddling("object"));
    assert!(!is_paragraph_straddling("span"));
}

// ========== serialization of reports ==========

#[test]
fn test_model_json_shape() {
    let json = serde_json::to_string(&model_for("head")).unwrap();
    assert_eq!(json, r#"{"kind":"categories","categories":["metadata"]}"#);

    let json = serde_json::to_string(&Model::Transparent).unwrap();
    assert_eq!(json, r#"{"kind":"transparent"}"#);
}
