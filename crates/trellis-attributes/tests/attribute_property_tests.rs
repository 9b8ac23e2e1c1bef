//! Property tests for the two serialization disciplines.

use quickcheck_macros::quickcheck;
use trellis_attributes::embedded::Muted;
use trellis_attributes::global::Title;
use trellis_attributes::prelude::*;
use trellis_attributes::{RawAttribute, TextEncoding};

#[quickcheck]
fn prop_string_value_round_trips(value: String) -> bool {
    let title = Title::new(value.clone());
    let expected = format!("title=\"{value}\"");
    title.to_markup(TextEncoding::Utf8) == Ok(expected.clone())
        && title.to_markup_string() == expected
        && title.into_inner() == value
}

#[quickcheck]
fn prop_string_len_is_exact(value: String) -> bool {
    let title = Title::new(value);
    title.to_bytes().len() == title.serialized_len()
}

#[quickcheck]
fn prop_boolean_emits_name_iff_true(value: bool) -> bool {
    let muted = Muted::new(value);
    let bytes = muted.to_bytes();
    if value {
        bytes == b"muted"
    } else {
        bytes.is_empty()
    }
}

#[quickcheck]
fn prop_boolean_equality_follows_state(x: bool, y: bool) -> bool {
    (Muted::new(x) == Muted::new(y)) == (x == y)
}

#[quickcheck]
fn prop_string_equality_follows_value(x: String, y: String) -> bool {
    (Title::new(x.clone()) == Title::new(y.clone())) == (x == y)
}

#[quickcheck]
fn prop_raw_matches_typed(value: String) -> bool {
    let title = Title::new(value);
    RawAttribute::of_string(&title).to_bytes() == title.to_bytes()
}

#[quickcheck]
fn prop_latin1_never_fails(value: String) -> bool {
    Title::new(value).to_markup(TextEncoding::Latin1).is_ok()
}
