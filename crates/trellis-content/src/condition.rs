//! Conditional category membership.
//!
//! Several elements belong to a category only in some situations: "`a` (if
//! the `href` attribute is present)", "`area` (if it is a descendant of a
//! `map` element)", and so on. The static tables in [`crate::category`]
//! cannot express these, so they live here as data, and callers that need
//! exact answers evaluate them against an [`ElementContext`].

use std::collections::BTreeSet;

use serde::Serialize;

use crate::category::{Category, categories_for};
use crate::normalize_tag;

/// The situation under which an element joins a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Condition {
    /// "if it is a descendant of a `map` element"
    DescendantOf {
        /// Tag of the required ancestor.
        ancestor: &'static str,
    },
    /// "if the `href` attribute is present"
    AttributePresent {
        /// Attribute name.
        attribute: &'static str,
    },
    /// "if the `type` attribute is not in the Hidden state"
    ///
    /// Holds when the attribute is absent, too.
    AttributeNotValue {
        /// Attribute name.
        attribute: &'static str,
        /// Excluded value, compared ASCII case-insensitively.
        value: &'static str,
    },
    /// [§ 4.2.4 The link element](https://html.spec.whatwg.org/multipage/semantics.html#allowed-in-the-body)
    ///
    /// "if it is allowed in the body"
    AllowedInBody,
    /// [§ 4.4.14 The main element](https://html.spec.whatwg.org/multipage/grouping-content.html#hierarchically-correct-main-element)
    ///
    /// "if it is a hierarchically correct `main` element"
    HierarchicallyCorrect,
    /// The element has a descendant with the given tag.
    HasDescendant {
        /// Tag of the required descendant.
        descendant: &'static str,
    },
    /// "if the element's children include at least one `li` element"
    ChildrenInclude {
        /// Tag of the required child.
        child: &'static str,
    },
}

/// One row of the conditional-membership table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConditionalMembership {
    /// Element tag name.
    pub tag: &'static str,
    /// Category the element joins when `condition` holds.
    pub category: Category,
    /// When membership applies.
    pub condition: Condition,
}

const fn row(tag: &'static str, category: Category, condition: Condition) -> ConditionalMembership {
    ConditionalMembership {
        tag,
        category,
        condition,
    }
}

const HREF: Condition = Condition::AttributePresent { attribute: "href" };
const CONTROLS: Condition = Condition::AttributePresent {
    attribute: "controls",
};
const ITEMPROP: Condition = Condition::AttributePresent {
    attribute: "itemprop",
};
const IN_MAP: Condition = Condition::DescendantOf { ancestor: "map" };
const NOT_HIDDEN: Condition = Condition::AttributeNotValue {
    attribute: "type",
    value: "hidden",
};
const HAS_LI: Condition = Condition::ChildrenInclude { child: "li" };

/// Every conditional membership from the kinds-of-content index.
pub const CONDITIONAL_MEMBERSHIPS: &[ConditionalMembership] = &[
    row("a", Category::Interactive, HREF),
    row("area", Category::Flow, IN_MAP),
    row("area", Category::Phrasing, IN_MAP),
    row("audio", Category::Interactive, CONTROLS),
    row("audio", Category::Palpable, CONTROLS),
    row("dl", Category::Palpable, Condition::HasDescendant { descendant: "dt" }),
    row(
        "img",
        Category::Interactive,
        Condition::AttributePresent { attribute: "usemap" },
    ),
    row("input", Category::Interactive, NOT_HIDDEN),
    row("input", Category::Palpable, NOT_HIDDEN),
    row("link", Category::Flow, Condition::AllowedInBody),
    row("link", Category::Phrasing, Condition::AllowedInBody),
    row("main", Category::Flow, Condition::HierarchicallyCorrect),
    row("menu", Category::Palpable, HAS_LI),
    row("meta", Category::Flow, ITEMPROP),
    row("meta", Category::Phrasing, ITEMPROP),
    row("ol", Category::Palpable, HAS_LI),
    row("ul", Category::Palpable, HAS_LI),
    row("video", Category::Interactive, CONTROLS),
];

/// [§ 4.2.4 The link element](https://html.spec.whatwg.org/multipage/links.html#body-ok)
///
/// "Keywords that are body-ok affect whether link elements are allowed in
/// the body."
const BODY_OK_KEYWORDS: &[&str] = &[
    "dns-prefetch",
    "modulepreload",
    "pingback",
    "preconnect",
    "prefetch",
    "preload",
    "stylesheet",
];

/// Elements a hierarchically correct `main` may have as ancestors.
const MAIN_ANCESTORS: &[&str] = &["html", "body", "div", "form"];

/// What a condition may ask about the element being classified.
///
/// Implement this over whatever tree representation the caller has. Only
/// [`attribute_value`](Self::attribute_value),
/// [`ancestor_tags`](Self::ancestor_tags),
/// [`child_tags`](Self::child_tags) and
/// [`has_descendant`](Self::has_descendant) are required.
pub trait ElementContext {
    /// Value of the named attribute, if present. Boolean attributes that are
    /// present report `Some("")`.
    fn attribute_value(&self, name: &str) -> Option<&str>;

    /// Ancestor tag names, nearest first.
    fn ancestor_tags(&self) -> Vec<&str>;

    /// Tag names of the element's element children, in order.
    fn child_tags(&self) -> Vec<&str>;

    /// Whether any descendant element has tag `tag`.
    fn has_descendant(&self, tag: &str) -> bool;

    /// Whether the named attribute is present.
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute_value(name).is_some()
    }

    /// Whether some ancestor has tag `tag`.
    fn has_ancestor(&self, tag: &str) -> bool {
        self.ancestor_tags()
            .iter()
            .any(|ancestor| ancestor.eq_ignore_ascii_case(tag))
    }

    /// [§ 4.2.4 The link element](https://html.spec.whatwg.org/multipage/semantics.html#allowed-in-the-body)
    ///
    /// "A link element must have either a rel attribute or an itemprop
    /// attribute, but not both. If a link element has an itemprop attribute,
    /// or has a rel attribute that contains only keywords that are body-ok,
    /// the element is said to be allowed in the body."
    fn is_allowed_in_body(&self) -> bool {
        if self.has_attribute("itemprop") {
            return true;
        }
        self.attribute_value("rel").is_some_and(|rel| {
            let mut keywords = rel.split_ascii_whitespace().peekable();
            keywords.peek().is_some()
                && keywords.all(|keyword| {
                    BODY_OK_KEYWORDS
                        .iter()
                        .any(|ok| ok.eq_ignore_ascii_case(keyword))
                })
        })
    }

    /// [§ 4.4.14 The main element](https://html.spec.whatwg.org/multipage/grouping-content.html#hierarchically-correct-main-element)
    ///
    /// "A hierarchically correct main element is one whose ancestor elements
    /// are limited to html, body, div, form without an accessible name, and
    /// autonomous custom elements."
    ///
    /// NOTE: accessible names are not computed; any `form` ancestor passes.
    fn is_hierarchically_correct(&self) -> bool {
        self.ancestor_tags().iter().all(|ancestor| {
            ancestor.contains('-')
                || MAIN_ANCESTORS
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ancestor))
        })
    }
}

impl Condition {
    /// Evaluate this condition for the element described by `context`.
    pub fn holds<C: ElementContext + ?Sized>(&self, context: &C) -> bool {
        match *self {
            Self::DescendantOf { ancestor } => context.has_ancestor(ancestor),
            Self::AttributePresent { attribute } => context.has_attribute(attribute),
            Self::AttributeNotValue { attribute, value } => context
                .attribute_value(attribute)
                .is_none_or(|actual| !actual.eq_ignore_ascii_case(value)),
            Self::AllowedInBody => context.is_allowed_in_body(),
            Self::HierarchicallyCorrect => context.is_hierarchically_correct(),
            Self::HasDescendant { descendant } => context.has_descendant(descendant),
            Self::ChildrenInclude { child } => context
                .child_tags()
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(child)),
        }
    }
}

/// Conditional memberships recorded for `tag`.
pub fn conditional_memberships(tag: &str) -> impl Iterator<Item = &'static ConditionalMembership> {
    let tag = normalize_tag(tag).into_owned();
    CONDITIONAL_MEMBERSHIPS
        .iter()
        .filter(move |membership| membership.tag == tag)
}

/// Categories of `tag` once its conditions are evaluated against `context`.
///
/// This is the unconditional set from [`categories_for`] plus every
/// conditional category whose condition holds.
pub fn categories_in_context<C: ElementContext + ?Sized>(
    tag: &str,
    context: &C,
) -> BTreeSet<Category> {
    let mut categories = categories_for(tag);
    categories.extend(
        conditional_memberships(tag)
            .filter(|membership| membership.condition.holds(context))
            .map(|membership| membership.category),
    );
    categories
}

/// A detached description of an element, for evaluating conditions without
/// a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSnapshot {
    /// Attribute name/value pairs.
    pub attributes: Vec<(String, String)>,
    /// Ancestor tags, nearest first.
    pub ancestors: Vec<String>,
    /// Element children's tags, in order.
    pub children: Vec<String>,
    /// Every descendant element's tag.
    pub descendants: Vec<String>,
}

impl ElementSnapshot {
    /// An element with no attributes, ancestors, or children.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add the next ancestor outward.
    #[must_use]
    pub fn with_ancestor(mut self, tag: impl Into<String>) -> Self {
        self.ancestors.push(tag.into());
        self
    }

    /// Add a child element; children are descendants too.
    #[must_use]
    pub fn with_child(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.descendants.push(tag.clone());
        self.children.push(tag);
        self
    }

    /// Add a descendant that is not a direct child.
    #[must_use]
    pub fn with_descendant(mut self, tag: impl Into<String>) -> Self {
        self.descendants.push(tag.into());
        self
    }
}

impl ElementContext for ElementSnapshot {
    fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn ancestor_tags(&self) -> Vec<&str> {
        self.ancestors.iter().map(String::as_str).collect()
    }

    fn child_tags(&self) -> Vec<&str> {
        self.children.iter().map(String::as_str).collect()
    }

    fn has_descendant(&self, tag: &str) -> bool {
        self.descendants
            .iter()
            .any(|descendant| descendant.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_is_interactive_only_with_href() {
        let bare = ElementSnapshot::new();
        assert!(!categories_in_context("a", &bare).contains(&Category::Interactive));

        let link = ElementSnapshot::new().with_attribute("href", "/docs");
        assert!(categories_in_context("a", &link).contains(&Category::Interactive));
    }

    #[test]
    fn test_area_inside_map_is_phrasing() {
        let loose = ElementSnapshot::new().with_ancestor("div");
        assert!(categories_in_context("area", &loose).is_empty());

        let mapped = ElementSnapshot::new()
            .with_ancestor("map")
            .with_ancestor("body");
        let categories = categories_in_context("area", &mapped);
        assert!(categories.contains(&Category::Flow));
        assert!(categories.contains(&Category::Phrasing));
    }

    #[test]
    fn test_input_type_hidden() {
        let hidden = ElementSnapshot::new().with_attribute("type", "HIDDEN");
        assert!(!categories_in_context("input", &hidden).contains(&Category::Interactive));

        let untyped = ElementSnapshot::new();
        assert!(categories_in_context("input", &untyped).contains(&Category::Interactive));

        let text = ElementSnapshot::new().with_attribute("type", "text");
        assert!(categories_in_context("input", &text).contains(&Category::Palpable));
    }

    #[test]
    fn test_padded_type_is_an_invalid_value() {
        // Enumerated values are not trimmed; " hidden " falls back to text.
        let padded = ElementSnapshot::new().with_attribute("type", " hidden ");
        assert!(categories_in_context("input", &padded).contains(&Category::Interactive));
    }

    #[test]
    fn test_link_allowed_in_body() {
        let stylesheet = ElementSnapshot::new().with_attribute("rel", "stylesheet preload");
        assert!(Condition::AllowedInBody.holds(&stylesheet));

        let icon = ElementSnapshot::new().with_attribute("rel", "icon");
        assert!(!Condition::AllowedInBody.holds(&icon));

        let empty_rel = ElementSnapshot::new().with_attribute("rel", "  ");
        assert!(!Condition::AllowedInBody.holds(&empty_rel));

        let microdata = ElementSnapshot::new().with_attribute("itemprop", "url");
        assert!(categories_in_context("link", &microdata).contains(&Category::Phrasing));
    }

    #[test]
    fn test_main_hierarchy() {
        let correct = ElementSnapshot::new()
            .with_ancestor("div")
            .with_ancestor("body")
            .with_ancestor("html");
        assert!(categories_in_context("main", &correct).contains(&Category::Flow));

        let nested = ElementSnapshot::new()
            .with_ancestor("article")
            .with_ancestor("body");
        assert!(!categories_in_context("main", &nested).contains(&Category::Flow));

        let custom = ElementSnapshot::new().with_ancestor("app-shell");
        assert!(Condition::HierarchicallyCorrect.holds(&custom));
    }

    #[test]
    fn test_lists_are_palpable_with_items() {
        let empty = ElementSnapshot::new();
        assert!(!categories_in_context("ul", &empty).contains(&Category::Palpable));

        let items = ElementSnapshot::new().with_child("li");
        assert!(categories_in_context("ul", &items).contains(&Category::Palpable));
        assert!(categories_in_context("ol", &items).contains(&Category::Palpable));
    }

    #[test]
    fn test_description_list_with_wrapped_group() {
        let wrapped = ElementSnapshot::new()
            .with_child("div")
            .with_descendant("dt");
        assert!(categories_in_context("dl", &wrapped).contains(&Category::Palpable));
    }

    #[test]
    fn test_conditional_memberships_lookup() {
        let rows: Vec<_> = conditional_memberships("META").collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.condition == ITEMPROP));
        assert_eq!(conditional_memberships("div").count(), 0);
    }
}
