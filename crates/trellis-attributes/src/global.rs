//! [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes)
//!
//! "The following attributes are common to and may be specified on all HTML
//! elements."

attributes! {
    string:
    /// [§ 6.7.2 The accesskey attribute](https://html.spec.whatwg.org/multipage/interaction.html#the-accesskey-attribute)
    ///
    /// "All HTML elements may have the accesskey content attribute set. The
    /// accesskey attribute's value is used by the user agent as a guide for
    /// creating a keyboard shortcut that activates or focuses the element."
    Accesskey => "accesskey",
    /// [§ 6.8.6 Autocapitalization](https://html.spec.whatwg.org/multipage/interaction.html#attr-autocapitalize)
    ///
    /// Hints how text typed into the element is capitalized: `off`, `none`,
    /// `on`, `sentences`, `words`, or `characters`.
    Autocapitalize => "autocapitalize",
    /// [§ 3.2.6 The class attribute](https://html.spec.whatwg.org/multipage/dom.html#classes)
    ///
    /// "The attribute, if specified, must have a value that is a set of
    /// space-separated tokens representing the various classes that the
    /// element belongs to."
    Class => "class",
    /// [§ 6.8.1 Making document regions editable](https://html.spec.whatwg.org/multipage/interaction.html#attr-contenteditable)
    ///
    /// Enumerated: `true`, `false`, or `plaintext-only`.
    Contenteditable => "contenteditable",
    /// [§ 3.2.6.4 The dir attribute](https://html.spec.whatwg.org/multipage/dom.html#the-dir-attribute)
    ///
    /// Enumerated: `ltr`, `rtl`, or `auto`.
    Dir => "dir",
    /// [§ 6.11.7 The draggable attribute](https://html.spec.whatwg.org/multipage/dnd.html#the-draggable-attribute)
    ///
    /// Enumerated: `true` or `false`. Not a boolean attribute: the absent
    /// state means "auto".
    Draggable => "draggable",
    /// [§ 6.8.8 Input modalities: the enterkeyhint attribute](https://html.spec.whatwg.org/multipage/interaction.html#attr-enterkeyhint)
    Enterkeyhint => "enterkeyhint",
    /// [§ 3.2.6 The id attribute](https://html.spec.whatwg.org/multipage/dom.html#the-id-attribute)
    ///
    /// "The id attribute specifies its element's unique identifier (ID). The
    /// value must be unique amongst all the IDs in the element's tree and
    /// must contain at least one character. The value must not contain any
    /// ASCII whitespace."
    ///
    /// Neither rule is enforced here.
    Id => "id",
    /// [§ 6.8.7 Input modalities: the inputmode attribute](https://html.spec.whatwg.org/multipage/interaction.html#attr-inputmode)
    Inputmode => "inputmode",
    /// [§ 4.13.4 Custom elements](https://html.spec.whatwg.org/multipage/custom-elements.html#attr-is)
    ///
    /// Names the customized built-in element definition to use.
    Is => "is",
    /// [§ 5.2.2 Items](https://html.spec.whatwg.org/multipage/microdata.html#attr-itemid)
    Itemid => "itemid",
    /// [§ 5.2.3 Names: the itemprop attribute](https://html.spec.whatwg.org/multipage/microdata.html#names:-the-itemprop-attribute)
    ///
    /// Also decides whether `link` and `meta` are allowed in the body.
    Itemprop => "itemprop",
    /// [§ 5.2.2 Items](https://html.spec.whatwg.org/multipage/microdata.html#attr-itemref)
    Itemref => "itemref",
    /// [§ 5.2.2 Items](https://html.spec.whatwg.org/multipage/microdata.html#attr-itemtype)
    Itemtype => "itemtype",
    /// [§ 3.2.6.2 The lang and xml:lang attributes](https://html.spec.whatwg.org/multipage/dom.html#attr-lang)
    ///
    /// "The lang attribute (in no namespace) specifies the primary language
    /// for the element's contents and for any of the element's attributes
    /// that contain text. Its value must be a valid BCP 47 language tag, or
    /// the empty string."
    Lang => "lang",
    /// [§ 2.6.5 Nonce attributes](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#attr-nonce)
    Nonce => "nonce",
    /// [§ 6.12 The popover attribute](https://html.spec.whatwg.org/multipage/popover.html#attr-popover)
    ///
    /// Enumerated: `auto`, `manual`, or `hint`. The empty string means `auto`.
    Popover => "popover",
    /// [§ 4.12.4 The slot element](https://html.spec.whatwg.org/multipage/dom.html#attr-slot)
    Slot => "slot",
    /// [§ 6.9 Spelling and grammar checking](https://html.spec.whatwg.org/multipage/interaction.html#attr-spellcheck)
    ///
    /// Enumerated: `true` or `false`.
    Spellcheck => "spellcheck",
    /// [§ 3.2.6.5 The style attribute](https://html.spec.whatwg.org/multipage/dom.html#the-style-attribute)
    Style => "style",
    /// [§ 6.6.3 The tabindex attribute](https://html.spec.whatwg.org/multipage/interaction.html#attattr-tabindex)
    ///
    /// "The tabindex content attribute allows authors to make an element and
    /// regions that have the element as its DOM anchor be focusable areas,
    /// allow or prevent them from being sequentially focusable, and
    /// determine their relative ordering for sequential focus navigation."
    Tabindex => "tabindex",
    /// [§ 3.2.6.1 The title attribute](https://html.spec.whatwg.org/multipage/dom.html#the-title-attribute)
    ///
    /// "The title attribute represents advisory information for the element,
    /// such as would be appropriate for a tooltip."
    Title => "title",
    /// [§ 3.2.6.3 The translate attribute](https://html.spec.whatwg.org/multipage/dom.html#attr-translate)
    ///
    /// Enumerated: `yes` or `no`.
    Translate => "translate",
}

attributes! {
    boolean:
    /// [§ 6.6.7 The autofocus attribute](https://html.spec.whatwg.org/multipage/interaction.html#the-autofocus-attribute)
    Autofocus => "autofocus",
    /// [§ 6.1 The hidden attribute](https://html.spec.whatwg.org/multipage/interaction.html#the-hidden-attribute)
    ///
    /// Modeled as boolean: the `until-found` state is out of reach of this
    /// type and needs a raw attribute.
    Hidden => "hidden",
    /// [§ 6.3 Inert subtrees](https://html.spec.whatwg.org/multipage/interaction.html#the-inert-attribute)
    Inert => "inert",
    /// [§ 5.2.2 Items](https://html.spec.whatwg.org/multipage/microdata.html#attr-itemscope)
    Itemscope => "itemscope",
}

impl Tabindex {
    /// `tabindex` from an integer.
    ///
    /// "If the value is a negative integer: the user agent must consider the
    /// element as a focusable area, but should omit the element from any
    /// tabindex-ordered focus navigation order."
    #[must_use]
    pub fn from_int(value: i32) -> Self {
        Self::new(value.to_string())
    }
}

impl Dir {
    /// `dir="ltr"`.
    #[must_use]
    pub fn ltr() -> Self {
        Self::new("ltr")
    }

    /// `dir="rtl"`.
    #[must_use]
    pub fn rtl() -> Self {
        Self::new("rtl")
    }

    /// `dir="auto"`.
    #[must_use]
    pub fn auto() -> Self {
        Self::new("auto")
    }
}

impl Draggable {
    /// `draggable="true"` or `draggable="false"`.
    #[must_use]
    pub fn from_bool(value: bool) -> Self {
        Self::new(if value { "true" } else { "false" })
    }
}

impl Translate {
    /// `translate="yes"` or `translate="no"`.
    #[must_use]
    pub fn from_bool(value: bool) -> Self {
        Self::new(if value { "yes" } else { "no" })
    }
}

impl Class {
    /// Join class names with single spaces.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut value = String::new();
        for name in names {
            let name = name.as_ref();
            if name.is_empty() {
                continue;
            }
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(name);
        }
        Self::new(value)
    }

    /// The individual class names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.split_ascii_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_without_trait_import() {
        assert_eq!(Id::new("main").as_str(), "main");
        assert_eq!(Class::from_names(["a", "", "b"]).as_str(), "a b");
    }
}
