//! [§ 4.1 The document element](https://html.spec.whatwg.org/multipage/semantics.html#the-root-element),
//! [§ 4.2 Document metadata](https://html.spec.whatwg.org/multipage/semantics.html#document-metadata),
//! and [§ 4.3.1 The body element](https://html.spec.whatwg.org/multipage/sections.html#the-body-element).

use trellis_attributes::{document, form, global, hyperlink};

element! {
    /// [§ 4.1.1 The html element](https://html.spec.whatwg.org/multipage/semantics.html#the-html-element)
    ///
    /// "The html element represents the root of an HTML document."
    Html => "html" {}
}

element! {
    /// [§ 4.2.1 The head element](https://html.spec.whatwg.org/multipage/semantics.html#the-head-element)
    ///
    /// Content model: zero or more metadata content elements.
    Head => "head" {}
}

element! {
    /// [§ 4.2.2 The title element](https://html.spec.whatwg.org/multipage/semantics.html#the-title-element)
    ///
    /// Content model: text.
    Title => "title" {}
}

element! {
    /// [§ 4.2.3 The base element](https://html.spec.whatwg.org/multipage/semantics.html#the-base-element)
    void Base => "base" {
        href: hyperlink::Href,
        target: hyperlink::Target,
    }
}

element! {
    /// [§ 4.2.4 The link element](https://html.spec.whatwg.org/multipage/semantics.html#the-link-element)
    ///
    /// Flow and phrasing content only when allowed in the body.
    void Link => "link" {
        href: hyperlink::Href,
        rel: hyperlink::Rel,
        r#as: hyperlink::As,
        media: hyperlink::Media,
        hreflang: hyperlink::Hreflang,
        r#type: hyperlink::Type,
        crossorigin: hyperlink::Crossorigin,
        integrity: hyperlink::Integrity,
        referrerpolicy: hyperlink::Referrerpolicy,
        fetchpriority: hyperlink::Fetchpriority,
        blocking: hyperlink::Blocking,
    }
}

element! {
    /// [§ 4.2.5 The meta element](https://html.spec.whatwg.org/multipage/semantics.html#the-meta-element)
    ///
    /// Flow and phrasing content only with `itemprop`.
    void Meta => "meta" {
        name: form::Name,
        content: document::Content,
        charset: document::Charset,
        http_equiv: document::HttpEquiv,
        media: hyperlink::Media,
    }
}

element! {
    /// [§ 4.2.6 The style element](https://html.spec.whatwg.org/multipage/semantics.html#the-style-element)
    Style => "style" {
        media: hyperlink::Media,
        blocking: hyperlink::Blocking,
    }
}

element! {
    /// [§ 4.3.1 The body element](https://html.spec.whatwg.org/multipage/sections.html#the-body-element)
    Body => "body" {}
}

impl Html {
    /// `<html lang="...">`.
    #[must_use]
    pub fn with_lang(lang: impl Into<String>) -> Self {
        let mut html = Self::new();
        html.global.lang = Some(global::Lang::new(lang));
        html
    }
}

impl Meta {
    /// `<meta charset="utf-8">`.
    #[must_use]
    pub fn utf8() -> Self {
        Self {
            charset: Some(document::Charset::utf8()),
            ..Self::default()
        }
    }
}
