//! [§ 4.9 Tabular data](https://html.spec.whatwg.org/multipage/tables.html)

use trellis_attributes::table;

element! {
    /// [§ 4.9.1 The table element](https://html.spec.whatwg.org/multipage/tables.html#the-table-element)
    Table => "table" {}
}

element! {
    /// [§ 4.9.2 The caption element](https://html.spec.whatwg.org/multipage/tables.html#the-caption-element)
    Caption => "caption" {}
}

element! {
    /// [§ 4.9.3 The colgroup element](https://html.spec.whatwg.org/multipage/tables.html#the-colgroup-element)
    Colgroup => "colgroup" {
        span: table::Span,
    }
}

element! {
    /// [§ 4.9.4 The col element](https://html.spec.whatwg.org/multipage/tables.html#the-col-element)
    void Col => "col" {
        span: table::Span,
    }
}

element! {
    /// [§ 4.9.5 The tbody element](https://html.spec.whatwg.org/multipage/tables.html#the-tbody-element)
    Tbody => "tbody" {}
}

element! {
    /// [§ 4.9.6 The thead element](https://html.spec.whatwg.org/multipage/tables.html#the-thead-element)
    Thead => "thead" {}
}

element! {
    /// [§ 4.9.7 The tfoot element](https://html.spec.whatwg.org/multipage/tables.html#the-tfoot-element)
    Tfoot => "tfoot" {}
}

element! {
    /// [§ 4.9.8 The tr element](https://html.spec.whatwg.org/multipage/tables.html#the-tr-element)
    Tr => "tr" {}
}

element! {
    /// [§ 4.9.9 The td element](https://html.spec.whatwg.org/multipage/tables.html#the-td-element)
    Td => "td" {
        colspan: table::Colspan,
        rowspan: table::Rowspan,
        headers: table::Headers,
    }
}

element! {
    /// [§ 4.9.10 The th element](https://html.spec.whatwg.org/multipage/tables.html#the-th-element)
    Th => "th" {
        colspan: table::Colspan,
        rowspan: table::Rowspan,
        headers: table::Headers,
        scope: table::Scope,
        abbr: table::Abbr,
    }
}
