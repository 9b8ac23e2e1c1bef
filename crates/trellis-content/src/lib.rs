//! Content categories and content models for the Trellis HTML model.
//!
//! # Scope
//!
//! This crate implements:
//! - **Content categories** ([WHATWG § 3.2.5.2](https://html.spec.whatwg.org/multipage/dom.html#kinds-of-content))
//!   - Unconditional membership tables for all twelve categories
//!   - Conditional membership (`<a href>`, `<area>` in `<map>`, ...) as data
//! - **Content models** ([WHATWG § 3.2.5.1](https://html.spec.whatwg.org/multipage/dom.html#content-models))
//!   - Static per-tag lookup: nothing, text, categories, transparent
//!   - Validation predicates for candidate children and text
//!   - Transparent resolution against an ancestor chain
//!
//! Every lookup is total: unknown tags get flow content and no categories.
//! Tag names are matched ASCII case-insensitively.
//!
//! # Not Yet Implemented
//!
//! - Element-specific content model constraints beyond categories (e.g.
//!   "zero or more `li`", "must not contain interactive descendants")
//! - Accessible-name computation for the hierarchically-correct `main` check

use std::borrow::Cow;

/// Content categories and their static element tables.
pub mod category;
/// Conditional category membership and evaluation contexts.
pub mod condition;
/// Content models and the per-tag model lookup.
pub mod model;
/// Tag registries: void, text-only, transparent, paragraph-straddling.
pub mod registry;

pub use category::{Category, categories_for};
pub use condition::{
    CONDITIONAL_MEMBERSHIPS, Condition, ConditionalMembership, ElementContext, ElementSnapshot,
    categories_in_context, conditional_memberships,
};
pub use model::{Model, allows_child, model_for, resolve_model};
pub use registry::{
    PARAGRAPH_STRADDLING_ELEMENTS, TRANSPARENT_ELEMENTS, VOID_ELEMENTS, is_known_element,
    is_paragraph_straddling, is_transparent, is_void,
};

/// Lowercase `tag` if it has any ASCII uppercase letters.
fn normalize_tag(tag: &str) -> Cow<'_, str> {
    if tag.bytes().any(|byte| byte.is_ascii_uppercase()) {
        Cow::Owned(tag.to_ascii_lowercase())
    } else {
        Cow::Borrowed(tag)
    }
}
