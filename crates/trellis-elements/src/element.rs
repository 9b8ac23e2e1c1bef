//! Element identity and tag emission.
//!
//! [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
//!
//! "Tags are used to delimit the start and end of elements in the markup."
//! Only the tags themselves are produced here; children are whatever the
//! caller writes between them.

use std::collections::BTreeSet;

use trellis_attributes::AttributeBytes;
use trellis_content::{
    Category, ElementSnapshot, Model, categories_for, categories_in_context, model_for,
};

use crate::global::GlobalAttributes;

/// A named HTML element type.
pub trait Element {
    /// Tag name, lowercase.
    const TAG: &'static str;

    /// Whether the element is void: no end tag and no contents.
    const IS_VOID: bool = false;

    /// Attributes common to all elements.
    fn global(&self) -> &GlobalAttributes;

    /// The element-specific attributes that are set, in declaration order.
    fn own_attributes(&self) -> Vec<&dyn AttributeBytes>;

    /// Every attribute that is set: named global attributes, then the
    /// element's own, then `data-*` attributes.
    ///
    /// False boolean attributes are included; they serialize to nothing.
    fn attributes(&self) -> Vec<&dyn AttributeBytes> {
        let global = self.global();
        let mut attributes = global.named_attributes();
        attributes.extend(self.own_attributes());
        attributes.extend(global.data.iter().map(|raw| raw as &dyn AttributeBytes));
        attributes
    }

    /// The attribute section of the start tag: emitted attributes joined
    /// with single spaces.
    ///
    /// An attribute that serializes to no bytes contributes no separator
    /// either, so `[id="x", disabled=false, class="y"]` becomes
    /// `id="x" class="y"`.
    fn attribute_bytes(&self) -> Vec<u8> {
        let emitted: Vec<&dyn AttributeBytes> = self
            .attributes()
            .into_iter()
            .filter(|attribute| attribute.is_emitted())
            .collect();
        let capacity = emitted
            .iter()
            .map(|attribute| attribute.serialized_len())
            .sum::<usize>()
            + emitted.len().saturating_sub(1);

        let mut out = Vec::with_capacity(capacity);
        for (index, attribute) in emitted.iter().enumerate() {
            if index > 0 {
                out.push(b' ');
            }
            attribute.write_bytes(&mut out);
        }
        out
    }

    /// `<tag>` or `<tag attributes>`.
    fn start_tag(&self) -> Vec<u8> {
        let attributes = self.attribute_bytes();
        let mut out = Vec::with_capacity(Self::TAG.len() + attributes.len() + 3);
        out.push(b'<');
        out.extend_from_slice(Self::TAG.as_bytes());
        if !attributes.is_empty() {
            out.push(b' ');
            out.extend_from_slice(&attributes);
        }
        out.push(b'>');
        out
    }

    /// `</tag>`, or `None` for a void element.
    ///
    /// [§ 13.1.2.2 End tags](https://html.spec.whatwg.org/multipage/syntax.html#end-tags)
    fn end_tag(&self) -> Option<Vec<u8>> {
        if Self::IS_VOID {
            return None;
        }
        let mut out = Vec::with_capacity(Self::TAG.len() + 3);
        out.extend_from_slice(b"</");
        out.extend_from_slice(Self::TAG.as_bytes());
        out.push(b'>');
        Some(out)
    }

    /// The start tag as a string.
    fn start_tag_string(&self) -> String {
        String::from_utf8_lossy(&self.start_tag()).into_owned()
    }

    /// Categories the tag belongs to unconditionally.
    fn categories() -> BTreeSet<Category> {
        categories_for(Self::TAG)
    }

    /// The tag's content model.
    fn content_model() -> Model {
        model_for(Self::TAG)
    }

    /// Categories of this element instance: the unconditional ones plus
    /// those whose condition its attributes and `ancestors` (nearest first)
    /// satisfy.
    ///
    /// Conditions on children and descendants never hold here, since an
    /// element value does not own its contents.
    fn categories_with_ancestors(&self, ancestors: &[&str]) -> BTreeSet<Category> {
        let snapshot = self
            .attributes()
            .into_iter()
            .filter_map(|attribute| {
                attribute
                    .attribute_value()
                    .map(|value| (attribute.attribute_name(), value))
            })
            .fold(ElementSnapshot::new(), |snapshot, (name, value)| {
                snapshot.with_attribute(name, value)
            });
        let snapshot = ancestors
            .iter()
            .fold(snapshot, |snapshot, ancestor| snapshot.with_ancestor(*ancestor));
        categories_in_context(Self::TAG, &snapshot)
    }
}

/// Marker for void elements.
///
/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements only have a start tag; end tags must not be specified for
/// void elements."
pub trait VoidElement: Element {}
