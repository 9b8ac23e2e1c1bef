//! [§ 4.9 Tabular data](https://html.spec.whatwg.org/multipage/tables.html)

attributes! {
    string:
    /// [§ 4.9.11 Attributes common to td and th elements](https://html.spec.whatwg.org/multipage/tables.html#attr-tdth-colspan)
    ///
    /// "The td and th elements may have a colspan content attribute
    /// specified, whose value must be a valid non-negative integer greater
    /// than zero and less than or equal to 1000."
    Colspan => "colspan",
    /// [§ 4.9.11](https://html.spec.whatwg.org/multipage/tables.html#attr-tdth-rowspan)
    ///
    /// "The td and th elements may also have a rowspan content attribute
    /// specified, whose value must be a valid non-negative integer less than
    /// or equal to 65534."
    Rowspan => "rowspan",
    /// [§ 4.9.3 The colgroup element](https://html.spec.whatwg.org/multipage/tables.html#attr-colgroup-span)
    ///
    /// "If specified, must have a value that is a valid non-negative integer
    /// greater than zero and less than or equal to 1000."
    Span => "span",
    /// [§ 4.9.11](https://html.spec.whatwg.org/multipage/tables.html#attr-tdth-headers)
    Headers => "headers",
    /// [§ 4.9.10 The th element](https://html.spec.whatwg.org/multipage/tables.html#attr-th-scope)
    ///
    /// Enumerated: `row`, `col`, `rowgroup`, or `colgroup`.
    Scope => "scope",
    /// [§ 4.9.10](https://html.spec.whatwg.org/multipage/tables.html#attr-th-abbr)
    Abbr => "abbr",
}

integer_constructors!(Colspan, 1, 1000);
integer_constructors!(Rowspan, 0, 65534);
integer_constructors!(Span, 1, 1000);
