//! Document metadata, edits, quotations, lists, and interactive elements.

attributes! {
    string:
    /// [§ 4.2.5 The meta element](https://html.spec.whatwg.org/multipage/semantics.html#attr-meta-charset)
    ///
    /// "If specified, the charset attribute must have a value that is an
    /// ASCII case-insensitive match for the string 'utf-8'."
    Charset => "charset",
    /// [§ 4.2.5](https://html.spec.whatwg.org/multipage/semantics.html#attr-meta-content)
    Content => "content",
    /// [§ 4.2.5.3 Pragma directives](https://html.spec.whatwg.org/multipage/semantics.html#attr-meta-http-equiv)
    HttpEquiv => "http-equiv",
    /// [§ 4.7.3 Attributes common to ins and del elements](https://html.spec.whatwg.org/multipage/edits.html#attr-mod-datetime)
    ///
    /// Also the machine-readable value of `time`.
    Datetime => "datetime",
    /// [§ 4.7.3](https://html.spec.whatwg.org/multipage/edits.html#attr-mod-cite)
    ///
    /// The address of a quotation's source or an edit's explanation.
    Cite => "cite",
    /// [§ 4.4.5 The ol element](https://html.spec.whatwg.org/multipage/grouping-content.html#attr-ol-start)
    Start => "start",
    /// [§ 4.12.1 The script element](https://html.spec.whatwg.org/multipage/scripting.html#attr-script-type)
    ///
    /// Script block type is carried by [`crate::hyperlink::Type`]; this is
    /// the `ol` list marker style instead: `1`, `a`, `A`, `i`, or `I`.
    ListType => "type",
    /// [§ 4.11.4 The dialog element](https://html.spec.whatwg.org/multipage/interactive-elements.html#attr-dialog-closedby)
    Closedby => "closedby",
    /// [§ 4.11.1 The details element](https://html.spec.whatwg.org/multipage/interactive-elements.html#attr-details-name)
    ///
    /// Groups `details` elements into an exclusive accordion.
    Group => "name",
}

attributes! {
    boolean:
    /// [§ 4.4.5 The ol element](https://html.spec.whatwg.org/multipage/grouping-content.html#attr-ol-reversed)
    Reversed => "reversed",
    /// [§ 4.11.1 The details element](https://html.spec.whatwg.org/multipage/interactive-elements.html#attr-details-open)
    ///
    /// Also used by `dialog`.
    Open => "open",
    /// [§ 4.12.1 The script element](https://html.spec.whatwg.org/multipage/scripting.html#attr-script-async)
    Async => "async",
    /// [§ 4.12.1](https://html.spec.whatwg.org/multipage/scripting.html#attr-script-defer)
    Defer => "defer",
    /// [§ 4.12.1](https://html.spec.whatwg.org/multipage/scripting.html#attr-script-nomodule)
    Nomodule => "nomodule",
    /// [§ 4.12.3 The template element](https://html.spec.whatwg.org/multipage/scripting.html#attr-template-shadowrootdelegatesfocus)
    Shadowrootdelegatesfocus => "shadowrootdelegatesfocus",
}

impl Start {
    /// Ordinal of the first list item.
    #[must_use]
    pub fn from_int(value: i64) -> Self {
        Self::new(value.to_string())
    }
}

impl Charset {
    /// `charset="utf-8"`, the only conforming value.
    #[must_use]
    pub fn utf8() -> Self {
        Self::new("utf-8")
    }
}
