//! [§ 4.5 Text-level semantics](https://html.spec.whatwg.org/multipage/text-level-semantics.html)
//! and [§ 4.7 Edits](https://html.spec.whatwg.org/multipage/edits.html).
//!
//! Almost everything here is phrasing content with a phrasing content model.

use trellis_attributes::{document, form, hyperlink};

element! {
    /// [§ 4.5.1 The a element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-a-element)
    ///
    /// Content model: transparent, with no interactive content descendant.
    /// Interactive content only when `href` is set.
    Anchor => "a" {
        href: hyperlink::Href,
        target: hyperlink::Target,
        download: hyperlink::Download,
        ping: hyperlink::Ping,
        rel: hyperlink::Rel,
        hreflang: hyperlink::Hreflang,
        r#type: hyperlink::Type,
        referrerpolicy: hyperlink::Referrerpolicy,
    }
}

element! {
    /// [§ 4.5.2 The em element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-em-element)
    Em => "em" {}
}

element! {
    /// [§ 4.5.3 The strong element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-strong-element)
    Strong => "strong" {}
}

element! {
    /// [§ 4.5.4 The small element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-small-element)
    Small => "small" {}
}

element! {
    /// [§ 4.5.5 The s element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-s-element)
    S => "s" {}
}

element! {
    /// [§ 4.5.6 The cite element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-cite-element)
    Cite => "cite" {}
}

element! {
    /// [§ 4.5.7 The q element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-q-element)
    Q => "q" {
        cite: document::Cite,
    }
}

element! {
    /// [§ 4.5.8 The dfn element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-dfn-element)
    Dfn => "dfn" {}
}

element! {
    /// [§ 4.5.9 The abbr element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-abbr-element)
    Abbr => "abbr" {}
}

element! {
    /// [§ 4.5.10 The ruby element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-ruby-element)
    Ruby => "ruby" {}
}

element! {
    /// [§ 4.5.11 The rt element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-rt-element)
    Rt => "rt" {}
}

element! {
    /// [§ 4.5.12 The rp element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-rp-element)
    Rp => "rp" {}
}

element! {
    /// [§ 4.5.13 The data element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-data-element)
    Data => "data" {
        value: form::Value,
    }
}

element! {
    /// [§ 4.5.14 The time element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-time-element)
    Time => "time" {
        datetime: document::Datetime,
    }
}

element! {
    /// [§ 4.5.15 The code element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-code-element)
    Code => "code" {}
}

element! {
    /// [§ 4.5.16 The var element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-var-element)
    Var => "var" {}
}

element! {
    /// [§ 4.5.17 The samp element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-samp-element)
    Samp => "samp" {}
}

element! {
    /// [§ 4.5.18 The kbd element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-kbd-element)
    Kbd => "kbd" {}
}

element! {
    /// Subscript.
    Sub => "sub" {}
}

element! {
    /// Superscript.
    Sup => "sup" {}
}

element! {
    /// [§ 4.5.20 The i element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-i-element)
    I => "i" {}
}

element! {
    /// [§ 4.5.21 The b element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-b-element)
    B => "b" {}
}

element! {
    /// [§ 4.5.22 The u element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-u-element)
    U => "u" {}
}

element! {
    /// [§ 4.5.23 The mark element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-mark-element)
    Mark => "mark" {}
}

element! {
    /// [§ 4.5.24 The bdi element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-bdi-element)
    Bdi => "bdi" {}
}

element! {
    /// [§ 4.5.25 The bdo element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-bdo-element)
    ///
    /// `dir` is required; it lives in the global block.
    Bdo => "bdo" {}
}

element! {
    /// [§ 4.5.26 The span element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-span-element)
    Span => "span" {}
}

element! {
    /// [§ 4.5.27 The br element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-br-element)
    void Br => "br" {}
}

element! {
    /// [§ 4.5.28 The wbr element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-wbr-element)
    void Wbr => "wbr" {}
}

element! {
    /// [§ 4.7.1 The ins element](https://html.spec.whatwg.org/multipage/edits.html#the-ins-element)
    ///
    /// Content model: transparent. May straddle a paragraph boundary.
    Ins => "ins" {
        cite: document::Cite,
        datetime: document::Datetime,
    }
}

element! {
    /// [§ 4.7.2 The del element](https://html.spec.whatwg.org/multipage/edits.html#the-del-element)
    Del => "del" {
        cite: document::Cite,
        datetime: document::Datetime,
    }
}

impl Anchor {
    /// `<a href="...">`.
    #[must_use]
    pub fn link(href: impl Into<String>) -> Self {
        Self {
            href: Some(hyperlink::Href::new(href)),
            ..Self::default()
        }
    }
}
