//! Integration tests for attribute serialization and the numeric constructors.

use trellis_attributes::document::{HttpEquiv, Open, Start};
use trellis_attributes::embedded::{Alt, Controls, Width};
use trellis_attributes::form::{Checked, Disabled, Max, Maxlength, Size, Step};
use trellis_attributes::global::{Class, Hidden, Id, Tabindex};
use trellis_attributes::hyperlink::{Href, Rel};
use trellis_attributes::prelude::*;
use trellis_attributes::table::{Colspan, Rowspan};
use trellis_attributes::{
    AttributeError, DecodeError, RawAttribute, TextEncoding, serialize_boolean, serialize_string,
};

#[test]
fn test_true_boolean_is_bare_name() {
    let disabled = Disabled::new(true);
    assert_eq!(disabled.to_bytes(), b"disabled");
    assert_eq!(disabled.serialized_len(), 8);
    assert_eq!(serialize_boolean(&disabled), b"disabled");
}

#[test]
fn test_false_boolean_is_empty() {
    let disabled = Disabled::new(false);
    assert!(disabled.to_bytes().is_empty());
    assert_eq!(disabled.serialized_len(), 0);
    assert!(!disabled.is_emitted());
}

#[test]
fn test_boolean_default_is_present() {
    assert!(Hidden::default().is_present());
    assert_eq!(Hidden::default(), Hidden::present());
}

#[test]
fn test_boolean_all_cases() {
    let [on, off] = Checked::all_cases();
    assert!(on.value());
    assert!(!off.value());
    assert_ne!(on, off);
    assert_ne!(Disabled::new(true), Disabled::new(false));
    assert_eq!(Disabled::new(false), Disabled::new(false));
    assert_eq!(on.to_string(), "true");
    assert_eq!(off.to_string(), "false");
}

#[test]
fn test_boolean_conversions() {
    let open = Open::from(true);
    assert!(bool::from(open));
    assert_eq!(Controls::from_raw(false), Controls::new(false));
}

#[test]
fn test_string_serialization() {
    let href = Href::new("/docs");
    assert_eq!(href.to_bytes(), b"href=\"/docs\"");
    assert_eq!(serialize_string(&href), b"href=\"/docs\"");
    assert_eq!(href.to_string(), "/docs");
    assert_eq!(href.as_str(), "/docs");
}

#[test]
fn test_empty_string_still_serializes() {
    let alt = Alt::new("");
    assert!(alt.is_empty());
    assert_eq!(alt.to_bytes(), b"alt=\"\"");
    assert!(alt.is_emitted());
}

#[test]
fn test_serialized_len_counts_bytes() {
    let id = Id::new("日本");
    assert_eq!(id.len(), 6);
    assert_eq!(id.serialized_len(), 11);
    assert_eq!(id.to_bytes(), b"id=\"\xe6\x97\xa5\xe6\x9c\xac\"");
}

#[test]
fn test_hyphenated_name() {
    let equiv = HttpEquiv::new("refresh");
    assert_eq!(equiv.attribute_name(), "http-equiv");
    assert_eq!(equiv.to_markup_string(), "http-equiv=\"refresh\"");
}

#[test]
fn test_to_markup_encodings() {
    let id = Id::new("main");
    assert_eq!(id.to_markup(TextEncoding::Ascii), Ok("id=\"main\"".to_string()));

    let accented = Id::new("é");
    assert_eq!(
        accented.to_markup(TextEncoding::Ascii),
        Err(DecodeError::NonAscii {
            offset: 4,
            byte: 0xc3,
        })
    );
    // Latin-1 reads each UTF-8 byte as its own character.
    assert_eq!(
        accented.to_markup(TextEncoding::Latin1),
        Ok("id=\"\u{c3}\u{a9}\"".to_string())
    );
    assert_eq!(
        accented.to_markup(TextEncoding::Utf8),
        Ok("id=\"é\"".to_string())
    );
}

#[test]
fn test_dyn_attribute_bytes() {
    let attributes: Vec<Box<dyn AttributeBytes>> = vec![
        Box::new(Id::new("x")),
        Box::new(Hidden::new(false)),
        Box::new(RawAttribute::string("data-k", "v")),
    ];
    let emitted: Vec<String> = attributes
        .iter()
        .filter(|attribute| attribute.is_emitted())
        .map(|attribute| attribute.to_markup_string())
        .collect();
    assert_eq!(emitted, ["id=\"x\"", "data-k=\"v\""]);
}

#[test]
fn test_integer_constructors_in_range() {
    assert_eq!(Colspan::from_int(1).as_str(), "1");
    assert_eq!(Colspan::from_int(1000).as_str(), "1000");
    assert_eq!(Rowspan::from_int(0).as_str(), "0");
    assert_eq!(Maxlength::from_int(0).as_str(), "0");
    assert_eq!(Size::font_scale(3).as_str(), "3");
    assert_eq!(Tabindex::from_int(-1).as_str(), "-1");
    assert_eq!(Width::from_int(640).as_str(), "640");
    assert_eq!(Start::from_int(-4).as_str(), "-4");
}

#[test]
fn test_try_from_int_out_of_range() {
    assert_eq!(
        Colspan::try_from_int(0),
        Err(AttributeError::OutOfRange {
            attribute: "colspan",
            value: 0,
            min: 1,
            max: 1000,
        })
    );
    assert!(Rowspan::try_from_int(65535).is_err());
    assert!(Size::try_font_scale(8).is_err());
    assert!(Maxlength::try_from_int(-1).is_err());
}

#[test]
#[should_panic(expected = "`colspan` must be in 1..=1000, got 1001")]
fn test_from_int_panics_out_of_range() {
    let _ = Colspan::from_int(1001);
}

#[test]
#[should_panic(expected = "`size` must be in 1..=7, got 0")]
fn test_font_scale_panics_out_of_range() {
    let _ = Size::font_scale(0);
}

#[test]
fn test_float_constructors() {
    assert_eq!(Max::from_number(1.5).as_str(), "1.5");
    assert_eq!(Step::from_number(10.0).as_str(), "10");
    assert_eq!(Step::any().as_str(), "any");
    assert!(matches!(
        Max::try_from_number(f64::INFINITY),
        Err(AttributeError::NotFinite { attribute: "max", .. })
    ));
}

#[test]
#[should_panic(expected = "must be a finite number")]
fn test_from_number_panics_on_nan() {
    let _ = Max::from_number(f64::NAN);
}

#[test]
fn test_token_list_helpers() {
    let class = Class::from_names(["card", "wide"]);
    assert_eq!(class.as_str(), "card wide");
    assert_eq!(class.names().collect::<Vec<_>>(), ["card", "wide"]);

    let rel = Rel::from_keywords(["noopener", "noreferrer"]);
    assert_eq!(rel.to_markup_string(), "rel=\"noopener noreferrer\"");
}

#[test]
fn test_token_list_helpers_skip_empty_items() {
    assert_eq!(Class::from_names(["a", "", "b"]).as_str(), "a b");
    assert_eq!(Class::from_names(["", "a", ""]).as_str(), "a");
    assert!(Class::from_names([""; 3]).is_empty());
    assert_eq!(
        Rel::from_keywords(["", "nofollow", ""]).to_markup_string(),
        "rel=\"nofollow\""
    );
}
