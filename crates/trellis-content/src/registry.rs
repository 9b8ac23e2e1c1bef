//! Tag-name registries consulted by the content-model dispatch.

use crate::category::Category;
use crate::normalize_tag;
use strum::IntoEnumIterator;

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements: area, base, br, col, embed, hr, img, input, link, meta,
/// source, track, wbr"
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose content model is text only.
///
/// `script` and `style` hold raw text; `textarea` and `title` hold escapable
/// raw text.
pub const TEXT_ELEMENTS: &[&str] = &["title", "textarea", "script", "style"];

/// [§ 3.2.5.3 Transparent content models](https://html.spec.whatwg.org/multipage/dom.html#transparent-content-models)
///
/// "Some elements are described as transparent; they have 'transparent' in
/// the description of their content model. The content model of a
/// transparent element is derived from the content model of its parent
/// element."
pub const TRANSPARENT_ELEMENTS: &[&str] = &[
    "a", "ins", "del", "map", "noscript", "slot", "object", "canvas",
];

/// [§ 3.2.5.4 Paragraphs](https://html.spec.whatwg.org/multipage/dom.html#paragraphs)
///
/// "List of elements whose content models can include both phrasing content
/// and flow content" and whose hybrid model means a paragraph can straddle
/// them, so paragraph-boundary detection must look through them.
pub const PARAGRAPH_STRADDLING_ELEMENTS: &[&str] = &["a", "ins", "del", "map"];

/// Elements whose content model is phrasing content.
pub const PHRASING_MODEL_ELEMENTS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "pre", "legend", "summary", "abbr", "b", "bdi",
    "bdo", "button", "cite", "code", "data", "dfn", "em", "i", "kbd", "label", "mark",
    "meter", "output", "progress", "q", "rt", "s", "samp", "small", "span", "strong", "sub",
    "sup", "time", "u", "var",
];

/// Structural elements that belong to no content category but are still
/// part of HTML (document skeleton, tables, lists, and so on).
const STRUCTURAL_ELEMENTS: &[&str] = &[
    "html", "head", "body", "caption", "colgroup", "col", "thead", "tbody", "tfoot", "tr", "td",
    "th", "li", "dd", "dt", "figcaption", "legend", "summary", "source", "track", "area", "rp",
    "rt", "optgroup", "option", "main",
];

fn contains(list: &[&str], tag: &str) -> bool {
    let tag = normalize_tag(tag);
    list.iter().any(|member| *member == tag.as_ref())
}

/// Whether `tag` is a void element: no children, no end tag.
#[must_use]
pub fn is_void(tag: &str) -> bool {
    contains(VOID_ELEMENTS, tag)
}

/// Whether `tag` has a transparent content model.
#[must_use]
pub fn is_transparent(tag: &str) -> bool {
    contains(TRANSPARENT_ELEMENTS, tag)
}

/// Whether paragraph-boundary detection must look through `tag`.
#[must_use]
pub fn is_paragraph_straddling(tag: &str) -> bool {
    contains(PARAGRAPH_STRADDLING_ELEMENTS, tag)
}

/// Whether `tag` names an element this crate knows about.
///
/// Unknown tags still get a permissive classification from
/// [`crate::model_for`]; this is for callers that want to warn about them.
#[must_use]
pub fn is_known_element(tag: &str) -> bool {
    [
        VOID_ELEMENTS,
        TEXT_ELEMENTS,
        TRANSPARENT_ELEMENTS,
        PHRASING_MODEL_ELEMENTS,
        STRUCTURAL_ELEMENTS,
    ]
    .iter()
    .any(|list| contains(list, tag))
        || Category::iter().any(|category| category.contains(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_straddling_are_transparent() {
        for tag in PARAGRAPH_STRADDLING_ELEMENTS {
            assert!(is_transparent(tag), "{tag} should be transparent");
        }
    }

    #[test]
    fn test_known_elements() {
        assert!(is_known_element("tbody"));
        assert!(is_known_element("DIV"));
        assert!(is_known_element("option"));
        assert!(!is_known_element("blink"));
        assert!(!is_known_element("my-widget"));
    }
}
