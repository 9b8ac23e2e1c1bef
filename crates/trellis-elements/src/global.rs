//! The attribute block shared by every element.

use trellis_attributes::global::{
    Accesskey, Autocapitalize, Autofocus, Class, Contenteditable, Dir, Draggable, Enterkeyhint,
    Hidden, Id, Inert, Inputmode, Is, Itemid, Itemprop, Itemref, Itemscope, Itemtype, Lang, Nonce,
    Popover, Slot, Spellcheck, Style, Tabindex, Title, Translate,
};
use trellis_attributes::{AttributeBytes, RawAttribute};

macro_rules! global_attributes {
    ($($field:ident: $attr:ident),* $(,)?) => {
        /// [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes)
        ///
        /// Each named attribute is optional. Custom data attributes live in
        /// [`data`](Self::data) and always serialize after the named ones.
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct GlobalAttributes {
            $(
                #[doc = concat!("`", stringify!($attr), "`, if set.")]
                pub $field: Option<$attr>,
            )*
            /// [§ 3.2.6.6 Embedding custom non-visible data with the data-* attributes](https://html.spec.whatwg.org/multipage/dom.html#embedding-custom-non-visible-data-with-the-data-*-attributes)
            pub data: Vec<RawAttribute>,
        }

        impl GlobalAttributes {
            /// The named global attributes that are set, in declaration order.
            #[must_use]
            pub fn named_attributes(&self) -> Vec<&dyn AttributeBytes> {
                let fields: &[Option<&dyn AttributeBytes>] = &[
                    $(self.$field.as_ref().map(|attribute| attribute as &dyn AttributeBytes)),*
                ];
                fields.iter().flatten().copied().collect()
            }
        }
    };
}

global_attributes! {
    id: Id,
    class: Class,
    title: Title,
    lang: Lang,
    dir: Dir,
    style: Style,
    tabindex: Tabindex,
    accesskey: Accesskey,
    autocapitalize: Autocapitalize,
    autofocus: Autofocus,
    contenteditable: Contenteditable,
    draggable: Draggable,
    enterkeyhint: Enterkeyhint,
    hidden: Hidden,
    inert: Inert,
    inputmode: Inputmode,
    is: Is,
    itemid: Itemid,
    itemprop: Itemprop,
    itemref: Itemref,
    itemscope: Itemscope,
    itemtype: Itemtype,
    nonce: Nonce,
    popover: Popover,
    slot: Slot,
    spellcheck: Spellcheck,
    translate: Translate,
}

impl GlobalAttributes {
    /// Set `id`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(Id::new(id));
        self
    }

    /// Set `class` from its names.
    #[must_use]
    pub fn with_classes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.class = Some(Class::from_names(names));
        self
    }

    /// Add `data-{name}="{value}"`.
    #[must_use]
    pub fn with_data(mut self, name: &str, value: impl Into<String>) -> Self {
        self.data.push(RawAttribute::string(format!("data-{name}"), value));
        self
    }
}
