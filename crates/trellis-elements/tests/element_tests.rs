//! Integration tests for element tag emission and structural metadata.

use trellis_attributes::embedded::Controls;
use trellis_attributes::form::{Disabled, Name, Required};
use trellis_attributes::global::Hidden;
use trellis_content::{Category, Model};
use trellis_elements::forms::{Input, Select};
use trellis_elements::grouping::{Div, Hr, P};
use trellis_elements::media::{Area, Audio, Embed, Img, Source, Track};
use trellis_elements::metadata::{Base, Head, Link, Meta};
use trellis_elements::tabular::Col;
use trellis_elements::text::{Anchor, Br, Span, Wbr};
use trellis_elements::{Element, GlobalAttributes, VoidElement};

fn start(element: &impl Element) -> String {
    element.start_tag_string()
}

fn check_void<E: VoidElement + Default>() {
    assert!(E::IS_VOID, "{} should be void", E::TAG);
    assert_eq!(E::content_model(), Model::Nothing, "{}", E::TAG);
    assert_eq!(E::default().end_tag(), None, "{}", E::TAG);
}

#[test]
fn test_void_elements() {
    check_void::<Area>();
    check_void::<Base>();
    check_void::<Br>();
    check_void::<Col>();
    check_void::<Embed>();
    check_void::<Hr>();
    check_void::<Img>();
    check_void::<Input>();
    check_void::<Link>();
    check_void::<Meta>();
    check_void::<Source>();
    check_void::<Track>();
    check_void::<Wbr>();
}

#[test]
fn test_non_void_end_tag() {
    assert!(!Div::IS_VOID);
    assert_eq!(Div::new().end_tag(), Some(b"</div>".to_vec()));
    assert_eq!(Anchor::new().end_tag(), Some(b"</a>".to_vec()));
}

#[test]
fn test_bare_start_tag() {
    assert_eq!(start(&Div::new()), "<div>");
    assert_eq!(start(&Br::new()), "<br>");
    assert!(Span::new().attribute_bytes().is_empty());
}

#[test]
fn test_anchor_start_tag() {
    assert_eq!(start(&Anchor::link("/docs")), "<a href=\"/docs\">");
}

#[test]
fn test_false_boolean_omitted_with_separator() {
    let input = Input {
        name: Some(Name::new("q")),
        disabled: Some(Disabled::new(false)),
        required: Some(Required::new(true)),
        ..Input::default()
    };
    assert_eq!(start(&input), "<input name=\"q\" required>");
    assert_eq!(input.attribute_bytes(), b"name=\"q\" required");
}

#[test]
fn test_only_false_booleans_leave_bare_tag() {
    let div = Div {
        global: GlobalAttributes {
            hidden: Some(Hidden::new(false)),
            ..GlobalAttributes::default()
        },
    };
    assert_eq!(start(&div), "<div>");
    assert_eq!(div.attributes().len(), 1);
}

#[test]
fn test_attribute_order() {
    let div = Div {
        global: GlobalAttributes::default()
            .with_data("k", "v")
            .with_classes(["a", "b"])
            .with_id("x"),
    };
    assert_eq!(start(&div), "<div id=\"x\" class=\"a b\" data-k=\"v\">");
}

#[test]
fn test_img_with_source() {
    let img = Img::with_source("cat.png", "");
    assert_eq!(start(&img), "<img alt=\"\" src=\"cat.png\">");
}

#[test]
fn test_unicode_attribute_bytes() {
    let p = P {
        global: GlobalAttributes::default().with_id("日本"),
    };
    assert_eq!(p.attribute_bytes(), b"id=\"\xe6\x97\xa5\xe6\x9c\xac\"");
    assert_eq!(p.start_tag().len(), "<p >".len() + 11);
}

#[test]
fn test_static_metadata() {
    assert_eq!(Anchor::content_model(), Model::Transparent);
    assert_eq!(Head::content_model(), Model::categories([Category::Metadata]));
    assert_eq!(
        Select::content_model(),
        Model::categories([Category::SelectElementInnerContent])
    );
    assert!(!Select::content_model().allows(Category::Flow));

    let categories = Anchor::categories();
    assert!(categories.contains(&Category::Flow));
    assert!(categories.contains(&Category::Phrasing));
    assert!(!categories.contains(&Category::Interactive));
}

#[test]
fn test_anchor_interactive_only_with_href() {
    assert!(
        !Anchor::new()
            .categories_with_ancestors(&[])
            .contains(&Category::Interactive)
    );
    assert!(
        Anchor::link("/")
            .categories_with_ancestors(&[])
            .contains(&Category::Interactive)
    );
}

#[test]
fn test_area_flow_inside_map() {
    let area = Area::new();
    assert!(!area.categories_with_ancestors(&["body"]).contains(&Category::Flow));
    let in_map = area.categories_with_ancestors(&["map", "body"]);
    assert!(in_map.contains(&Category::Flow));
    assert!(in_map.contains(&Category::Phrasing));
}

#[test]
fn test_audio_controls() {
    let audio = Audio {
        controls: Some(Controls::new(true)),
        ..Audio::default()
    };
    let categories = audio.categories_with_ancestors(&[]);
    assert!(categories.contains(&Category::Interactive));
    assert!(categories.contains(&Category::Palpable));

    let silent = Audio {
        controls: Some(Controls::new(false)),
        ..Audio::default()
    };
    assert!(
        !silent
            .categories_with_ancestors(&[])
            .contains(&Category::Interactive)
    );
}

#[test]
fn test_hidden_input_is_not_interactive() {
    let mut input = Input::new();
    assert!(
        input
            .categories_with_ancestors(&[])
            .contains(&Category::Interactive)
    );
    input.r#type = Some(trellis_attributes::hyperlink::Type::new("hidden"));
    assert!(
        !input
            .categories_with_ancestors(&[])
            .contains(&Category::Interactive)
    );
}
