//! [§ 3.2.5.2 Kinds of content](https://html.spec.whatwg.org/multipage/dom.html#kinds-of-content)
//!
//! "Each element in HTML falls into zero or more categories that group
//! elements with similar characteristics together."
//!
//! The tables here hold only *unconditional* membership. Elements whose
//! membership depends on attributes or position (e.g. `<a href>` being
//! interactive) are listed in [`crate::condition::CONDITIONAL_MEMBERSHIPS`].

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::normalize_tag;

/// A content category from the WHATWG kinds-of-content index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// [§ 3.2.5.2.1 Metadata content](https://html.spec.whatwg.org/multipage/dom.html#metadata-content)
    ///
    /// "Metadata content is content that sets up the presentation or behavior
    /// of the rest of the content, or that sets up the relationship of the
    /// document with other documents, or that conveys other 'out of band'
    /// information."
    Metadata,
    /// [§ 3.2.5.2.2 Flow content](https://html.spec.whatwg.org/multipage/dom.html#flow-content)
    ///
    /// "Most elements that are used in the body of documents and applications
    /// are categorized as flow content."
    Flow,
    /// [§ 3.2.5.2.3 Sectioning content](https://html.spec.whatwg.org/multipage/dom.html#sectioning-content)
    ///
    /// "Sectioning content is content that defines the scope of headers and
    /// footers."
    Sectioning,
    /// [§ 3.2.5.2.4 Heading content](https://html.spec.whatwg.org/multipage/dom.html#heading-content)
    ///
    /// "Heading content defines the heading of a section."
    Heading,
    /// [§ 3.2.5.2.5 Phrasing content](https://html.spec.whatwg.org/multipage/dom.html#phrasing-content)
    ///
    /// "Phrasing content is the text of the document, as well as elements
    /// that mark up that text at the intra-paragraph level."
    Phrasing,
    /// [§ 3.2.5.2.6 Embedded content](https://html.spec.whatwg.org/multipage/dom.html#embedded-content-2)
    ///
    /// "Embedded content is content that imports another resource into the
    /// document, or content from another vocabulary that is inserted into
    /// the document."
    Embedded,
    /// [§ 3.2.5.2.7 Interactive content](https://html.spec.whatwg.org/multipage/dom.html#interactive-content)
    ///
    /// "Interactive content is content that is specifically intended for
    /// user interaction."
    Interactive,
    /// [§ 3.2.5.2.8 Palpable content](https://html.spec.whatwg.org/multipage/dom.html#palpable-content)
    ///
    /// "As a general rule, elements whose content model allows any flow
    /// content or phrasing content should have at least one node in its
    /// contents that is palpable content."
    Palpable,
    /// [§ 3.2.5.2.9 Script-supporting elements](https://html.spec.whatwg.org/multipage/dom.html#script-supporting-elements)
    ///
    /// "Script-supporting elements are those that do not represent anything
    /// themselves (i.e. they are not rendered), but are used to support
    /// scripts."
    ScriptSupporting,
    /// [§ 4.10.7 The select element](https://html.spec.whatwg.org/multipage/form-elements.html#select-element-inner-content-elements)
    ///
    /// Elements permitted directly inside `<select>`.
    SelectElementInnerContent,
    /// [§ 4.10.9 The optgroup element](https://html.spec.whatwg.org/multipage/form-elements.html#optgroup-element-inner-content-elements)
    ///
    /// Elements permitted directly inside `<optgroup>`.
    OptgroupElementInnerContent,
    /// [§ 4.10.10 The option element](https://html.spec.whatwg.org/multipage/form-elements.html#option-element-inner-content-elements)
    ///
    /// Elements permitted inside `<option>`.
    OptionElementInnerContent,
}

const METADATA: &[&str] = &[
    "base", "link", "meta", "noscript", "script", "style", "template", "title",
];

// `area`, `link`, `main` and `meta` are flow content only under conditions.
const FLOW: &[&str] = &[
    "a",
    "abbr",
    "address",
    "article",
    "aside",
    "audio",
    "b",
    "bdi",
    "bdo",
    "blockquote",
    "br",
    "button",
    "canvas",
    "cite",
    "code",
    "data",
    "datalist",
    "del",
    "details",
    "dfn",
    "dialog",
    "div",
    "dl",
    "em",
    "embed",
    "fieldset",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "i",
    "iframe",
    "img",
    "input",
    "ins",
    "kbd",
    "label",
    "map",
    "mark",
    "math",
    "menu",
    "meter",
    "nav",
    "noscript",
    "object",
    "ol",
    "output",
    "p",
    "picture",
    "pre",
    "progress",
    "q",
    "ruby",
    "s",
    "samp",
    "script",
    "search",
    "section",
    "select",
    "slot",
    "small",
    "span",
    "strong",
    "sub",
    "sup",
    "svg",
    "table",
    "template",
    "textarea",
    "time",
    "u",
    "ul",
    "var",
    "video",
    "wbr",
];

const SECTIONING: &[&str] = &["article", "aside", "nav", "section"];

const HEADING: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "hgroup"];

const PHRASING: &[&str] = &[
    "a", "abbr", "audio", "b", "bdi", "bdo", "br", "button", "canvas", "cite", "code", "data",
    "datalist", "del", "dfn", "em", "embed", "i", "iframe", "img", "input", "ins", "kbd", "label",
    "map", "mark", "math", "meter", "noscript", "object", "output", "picture", "progress", "q",
    "ruby", "s", "samp", "script", "select", "slot", "small", "span", "strong", "sub", "sup",
    "svg", "template", "textarea", "time", "u", "var", "video", "wbr",
];

const EMBEDDED: &[&str] = &[
    "audio", "canvas", "embed", "iframe", "img", "math", "object", "picture", "svg", "video",
];

const INTERACTIVE: &[&str] = &[
    "button", "details", "embed", "iframe", "label", "select", "textarea",
];

const PALPABLE: &[&str] = &[
    "a",
    "abbr",
    "address",
    "article",
    "aside",
    "b",
    "bdi",
    "bdo",
    "blockquote",
    "button",
    "canvas",
    "cite",
    "code",
    "data",
    "details",
    "dfn",
    "div",
    "em",
    "embed",
    "fieldset",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "i",
    "iframe",
    "img",
    "ins",
    "kbd",
    "label",
    "main",
    "map",
    "mark",
    "math",
    "meter",
    "nav",
    "object",
    "output",
    "p",
    "picture",
    "pre",
    "progress",
    "q",
    "ruby",
    "s",
    "samp",
    "search",
    "section",
    "select",
    "small",
    "span",
    "strong",
    "sub",
    "sup",
    "svg",
    "table",
    "textarea",
    "time",
    "u",
    "var",
    "video",
];

const SCRIPT_SUPPORTING: &[&str] = &["script", "template"];

const SELECT_INNER: &[&str] = &[
    "option", "optgroup", "hr", "script", "template", "noscript", "div",
];

const OPTGROUP_INNER: &[&str] = &["option", "script", "template", "noscript", "div"];

// Phrasing content minus interactive content, plus `div`.
const OPTION_INNER: &[&str] = &[
    "abbr", "b", "bdi", "bdo", "br", "cite", "code", "data", "dfn", "div", "em", "i", "img",
    "kbd", "mark", "math", "noscript", "q", "ruby", "s", "samp", "script", "small", "span",
    "strong", "sub", "sup", "svg", "template", "time", "u", "var", "wbr",
];

static FLOW_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FLOW.iter().copied().collect());

impl Category {
    /// Tag names that belong to this category unconditionally.
    #[must_use]
    pub const fn elements(self) -> &'static [&'static str] {
        match self {
            Self::Metadata => METADATA,
            Self::Flow => FLOW,
            Self::Sectioning => SECTIONING,
            Self::Heading => HEADING,
            Self::Phrasing => PHRASING,
            Self::Embedded => EMBEDDED,
            Self::Interactive => INTERACTIVE,
            Self::Palpable => PALPABLE,
            Self::ScriptSupporting => SCRIPT_SUPPORTING,
            Self::SelectElementInnerContent => SELECT_INNER,
            Self::OptgroupElementInnerContent => OPTGROUP_INNER,
            Self::OptionElementInnerContent => OPTION_INNER,
        }
    }

    /// Whether `tag` is an unconditional member of this category.
    #[must_use]
    pub fn contains(self, tag: &str) -> bool {
        let tag = normalize_tag(tag);
        if self == Self::Flow {
            return FLOW_SET.contains(tag.as_ref());
        }
        self.elements().iter().any(|member| *member == tag.as_ref())
    }

    /// Whether every element of this category is also flow content.
    ///
    /// Used by [`crate::Model::Transparent`] when no ancestor is known.
    #[must_use]
    pub fn is_within_flow(self) -> bool {
        self.elements().iter().all(|tag| FLOW_SET.contains(tag))
    }
}

/// Every category `tag` belongs to unconditionally.
///
/// Conditional membership is not included; see
/// [`crate::categories_in_context`] for that.
#[must_use]
pub fn categories_for(tag: &str) -> BTreeSet<Category> {
    Category::iter().filter(|category| category.contains(tag)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_kebab_case() {
        assert_eq!(Category::ScriptSupporting.to_string(), "script-supporting");
        assert_eq!(
            Category::SelectElementInnerContent.to_string(),
            "select-element-inner-content"
        );
        assert_eq!("Phrasing".parse::<Category>(), Ok(Category::Phrasing));
    }

    #[test]
    fn test_phrasing_is_within_flow() {
        assert!(Category::Phrasing.is_within_flow());
        assert!(Category::Heading.is_within_flow());
        assert!(Category::Sectioning.is_within_flow());
        assert!(Category::Embedded.is_within_flow());
        assert!(Category::Interactive.is_within_flow());
        assert!(Category::ScriptSupporting.is_within_flow());
    }

    #[test]
    fn test_metadata_and_select_inner_are_not_within_flow() {
        assert!(!Category::Metadata.is_within_flow());
        assert!(!Category::SelectElementInnerContent.is_within_flow());
        assert!(!Category::OptgroupElementInnerContent.is_within_flow());
    }

    #[test]
    fn test_conditional_members_are_not_in_static_tables() {
        assert!(!Category::Flow.contains("area"));
        assert!(!Category::Flow.contains("main"));
        assert!(!Category::Interactive.contains("a"));
        assert!(!Category::Palpable.contains("ul"));
    }

    #[test]
    fn test_contains_ignores_ascii_case() {
        assert!(Category::Sectioning.contains("ARTICLE"));
        assert!(Category::Flow.contains("Div"));
    }
}
