//! [§ 4.3 Sections](https://html.spec.whatwg.org/multipage/sections.html)

element! {
    /// [§ 4.3.2 The article element](https://html.spec.whatwg.org/multipage/sections.html#the-article-element)
    Article => "article" {}
}

element! {
    /// [§ 4.3.3 The section element](https://html.spec.whatwg.org/multipage/sections.html#the-section-element)
    Section => "section" {}
}

element! {
    /// [§ 4.3.4 The nav element](https://html.spec.whatwg.org/multipage/sections.html#the-nav-element)
    Nav => "nav" {}
}

element! {
    /// [§ 4.3.5 The aside element](https://html.spec.whatwg.org/multipage/sections.html#the-aside-element)
    Aside => "aside" {}
}

element! {
    /// [§ 4.3.6 The h1, h2, h3, h4, h5, and h6 elements](https://html.spec.whatwg.org/multipage/sections.html#the-h1,-h2,-h3,-h4,-h5,-and-h6-elements)
    ///
    /// Content model: phrasing content.
    H1 => "h1" {}
}

element! {
    /// A rank 2 heading.
    H2 => "h2" {}
}

element! {
    /// A rank 3 heading.
    H3 => "h3" {}
}

element! {
    /// A rank 4 heading.
    H4 => "h4" {}
}

element! {
    /// A rank 5 heading.
    H5 => "h5" {}
}

element! {
    /// A rank 6 heading.
    H6 => "h6" {}
}

element! {
    /// [§ 4.3.7 The hgroup element](https://html.spec.whatwg.org/multipage/sections.html#the-hgroup-element)
    Hgroup => "hgroup" {}
}

element! {
    /// [§ 4.3.8 The header element](https://html.spec.whatwg.org/multipage/sections.html#the-header-element)
    Header => "header" {}
}

element! {
    /// [§ 4.3.9 The footer element](https://html.spec.whatwg.org/multipage/sections.html#the-footer-element)
    Footer => "footer" {}
}

element! {
    /// [§ 4.3.10 The address element](https://html.spec.whatwg.org/multipage/sections.html#the-address-element)
    Address => "address" {}
}
