//! [§ 4.4 Grouping content](https://html.spec.whatwg.org/multipage/grouping-content.html)

use trellis_attributes::{document, form};

element! {
    /// [§ 4.4.1 The p element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-p-element)
    ///
    /// Content model: phrasing content.
    P => "p" {}
}

element! {
    /// [§ 4.4.2 The hr element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-hr-element)
    void Hr => "hr" {}
}

element! {
    /// [§ 4.4.3 The pre element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-pre-element)
    Pre => "pre" {}
}

element! {
    /// [§ 4.4.4 The blockquote element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-blockquote-element)
    Blockquote => "blockquote" {
        cite: document::Cite,
    }
}

element! {
    /// [§ 4.4.5 The ol element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-ol-element)
    ///
    /// Palpable content when it has at least one `li` child.
    Ol => "ol" {
        reversed: document::Reversed,
        start: document::Start,
        r#type: document::ListType,
    }
}

element! {
    /// [§ 4.4.6 The ul element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-ul-element)
    Ul => "ul" {}
}

element! {
    /// [§ 4.4.7 The menu element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-menu-element)
    Menu => "menu" {}
}

element! {
    /// [§ 4.4.8 The li element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-li-element)
    Li => "li" {
        value: form::Value,
    }
}

element! {
    /// [§ 4.4.9 The dl element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-dl-element)
    Dl => "dl" {}
}

element! {
    /// [§ 4.4.10 The dt element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-dt-element)
    Dt => "dt" {}
}

element! {
    /// [§ 4.4.11 The dd element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-dd-element)
    Dd => "dd" {}
}

element! {
    /// [§ 4.4.12 The figure element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-figure-element)
    Figure => "figure" {}
}

element! {
    /// [§ 4.4.13 The figcaption element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-figcaption-element)
    Figcaption => "figcaption" {}
}

element! {
    /// [§ 4.4.14 The main element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-main-element)
    ///
    /// Flow content only where hierarchically correct.
    Main => "main" {}
}

element! {
    /// [§ 4.4.15 The search element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-search-element)
    Search => "search" {}
}

element! {
    /// [§ 4.4.16 The div element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-div-element)
    ///
    /// "The div element has no special meaning at all."
    Div => "div" {}
}
