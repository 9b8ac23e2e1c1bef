//! [§ 3.2.5.1 Content models](https://html.spec.whatwg.org/multipage/dom.html#content-models)
//!
//! "Each element defined in this specification has a content model: a
//! description of the element's expected contents."

use std::collections::BTreeSet;

use serde::Serialize;

use crate::category::{Category, categories_for};
use crate::condition::{ElementSnapshot, categories_in_context};
use crate::normalize_tag;
use crate::registry::{PHRASING_MODEL_ELEMENTS, TEXT_ELEMENTS, is_transparent, is_void};

/// What an element may contain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "categories", rename_all = "kebab-case")]
pub enum Model {
    /// [§ 3.2.5.1](https://html.spec.whatwg.org/multipage/dom.html#concept-content-nothing)
    ///
    /// "When an element's content model is nothing, the element must contain
    /// no Text nodes (other than inter-element whitespace) and no element
    /// nodes."
    Nothing,
    /// Text only; no element children.
    Text,
    /// Each child must belong to at least one of these categories.
    Categories(BTreeSet<Category>),
    /// [§ 3.2.5.3 Transparent content models](https://html.spec.whatwg.org/multipage/dom.html#transparent-content-models)
    ///
    /// "When a transparent element has no parent, then the part of its
    /// content model that is 'transparent' must instead be treated as flow
    /// content."
    Transparent,
}

impl Model {
    /// A [`Model::Categories`] over the given categories.
    #[must_use]
    pub fn categories<I: IntoIterator<Item = Category>>(categories: I) -> Self {
        Self::Categories(categories.into_iter().collect())
    }

    /// Flow content, the fallback model.
    #[must_use]
    pub fn flow() -> Self {
        Self::categories([Category::Flow])
    }

    /// Whether children of `category` are permitted.
    ///
    /// For [`Model::Transparent`] no ancestor is known here, so it accepts
    /// flow content and every category whose elements are all flow content.
    /// [`resolve_model`] gives the ancestor-aware answer.
    #[must_use]
    pub fn allows(&self, category: Category) -> bool {
        match self {
            Self::Nothing | Self::Text => false,
            Self::Categories(set) => set.contains(&category),
            Self::Transparent => category == Category::Flow || category.is_within_flow(),
        }
    }

    /// Whether text children are permitted.
    #[must_use]
    pub fn allows_text(&self) -> bool {
        match self {
            Self::Nothing => false,
            Self::Text | Self::Transparent => true,
            Self::Categories(set) => {
                set.contains(&Category::Phrasing) || set.contains(&Category::Flow)
            }
        }
    }

    /// Whether an element with tag `child` is permitted, judged by its
    /// unconditional categories.
    #[must_use]
    pub fn allows_element(&self, child: &str) -> bool {
        categories_for(child)
            .into_iter()
            .any(|category| self.allows(category))
    }
}

/// The content model of `tag`.
///
/// Checked in priority order: void elements, text-only elements, transparent
/// elements, `head`, the `select` family, phrasing-only elements, and
/// finally flow content for everything else, unknown tags included.
#[must_use]
pub fn model_for(tag: &str) -> Model {
    if is_void(tag) {
        return Model::Nothing;
    }
    let tag = normalize_tag(tag);
    let tag = tag.as_ref();
    if TEXT_ELEMENTS.contains(&tag) {
        return Model::Text;
    }
    if is_transparent(tag) {
        return Model::Transparent;
    }
    match tag {
        "head" => Model::categories([Category::Metadata]),
        "select" => Model::categories([Category::SelectElementInnerContent]),
        "optgroup" => Model::categories([Category::OptgroupElementInnerContent]),
        "option" => Model::categories([Category::OptionElementInnerContent]),
        _ if PHRASING_MODEL_ELEMENTS.contains(&tag) => Model::categories([Category::Phrasing]),
        _ => Model::flow(),
    }
}

/// The content model of `tag` with transparency resolved.
///
/// `ancestors` are ordered nearest first. A transparent model takes the
/// model of the nearest ancestor that is not itself transparent; with no
/// such ancestor it is flow content.
#[must_use]
pub fn resolve_model<I, S>(tag: &str, ancestors: I) -> Model
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let model = model_for(tag);
    if model != Model::Transparent {
        return model;
    }
    ancestors
        .into_iter()
        .map(|ancestor| model_for(ancestor.as_ref()))
        .find(|model| *model != Model::Transparent)
        .unwrap_or_else(Model::flow)
}

/// Whether `child` may be a child of `parent`, where `ancestors` are the
/// parent's ancestors, nearest first.
///
/// The child is judged by its categories in context: `parent` followed by
/// `ancestors` is the child's ancestor chain, so conditions such as "inside
/// `map`" or "hierarchically correct `main`" are evaluated. The child has no
/// attributes here.
#[must_use]
pub fn allows_child<I, S>(parent: &str, child: &str, ancestors: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ancestors: Vec<String> = ancestors
        .into_iter()
        .map(|ancestor| ancestor.as_ref().to_owned())
        .collect();
    let model = resolve_model(parent, &ancestors);
    let context = ElementSnapshot {
        ancestors: std::iter::once(parent.to_owned())
            .chain(ancestors)
            .collect(),
        ..ElementSnapshot::default()
    };
    categories_in_context(child, &context)
        .into_iter()
        .any(|category| model.allows(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements_have_nothing_model() {
        for tag in ["img", "input", "br", "area", "wbr"] {
            assert_eq!(model_for(tag), Model::Nothing, "{tag}");
        }
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(model_for("title"), Model::Text);
        assert_eq!(model_for("a"), Model::Transparent);
        assert_eq!(model_for("head"), Model::categories([Category::Metadata]));
        assert_eq!(model_for("h2"), Model::categories([Category::Phrasing]));
        assert_eq!(model_for("div"), Model::flow());
    }

    #[test]
    fn test_allows_text() {
        assert!(!Model::Nothing.allows_text());
        assert!(Model::Text.allows_text());
        assert!(Model::Transparent.allows_text());
        assert!(Model::categories([Category::Phrasing]).allows_text());
        assert!(!Model::categories([Category::Metadata]).allows_text());
    }

    #[test]
    fn test_text_model_allows_no_category() {
        assert!(!Model::Text.allows(Category::Phrasing));
        assert!(!Model::Nothing.allows(Category::Flow));
    }

    #[test]
    fn test_resolve_model_skips_transparent_ancestors() {
        // <p><ins><a>: the anchor inherits the paragraph's phrasing model.
        let resolved = resolve_model("a", ["ins", "p", "body"]);
        assert_eq!(resolved, Model::categories([Category::Phrasing]));
        assert_eq!(resolve_model("a", Vec::<&str>::new()), Model::flow());
        assert_eq!(resolve_model("div", ["p"]), Model::flow());
    }
}
