//! [§ 4.12 Scripting](https://html.spec.whatwg.org/multipage/scripting.html)

use trellis_attributes::{document, embedded, form, hyperlink};

element! {
    /// [§ 4.12.1 The script element](https://html.spec.whatwg.org/multipage/scripting.html#the-script-element)
    ///
    /// Content model: text. Metadata, flow, phrasing, and script-supporting
    /// content.
    Script => "script" {
        src: embedded::Src,
        r#type: hyperlink::Type,
        nomodule: document::Nomodule,
        r#async: document::Async,
        defer: document::Defer,
        crossorigin: hyperlink::Crossorigin,
        integrity: hyperlink::Integrity,
        referrerpolicy: hyperlink::Referrerpolicy,
        blocking: hyperlink::Blocking,
        fetchpriority: hyperlink::Fetchpriority,
    }
}

element! {
    /// [§ 4.12.2 The noscript element](https://html.spec.whatwg.org/multipage/scripting.html#the-noscript-element)
    Noscript => "noscript" {}
}

element! {
    /// [§ 4.12.3 The template element](https://html.spec.whatwg.org/multipage/scripting.html#the-template-element)
    Template => "template" {
        shadowrootdelegatesfocus: document::Shadowrootdelegatesfocus,
    }
}

element! {
    /// [§ 4.12.4 The slot element](https://html.spec.whatwg.org/multipage/scripting.html#the-slot-element)
    Slot => "slot" {
        name: form::Name,
    }
}

element! {
    /// [§ 4.12.5 The canvas element](https://html.spec.whatwg.org/multipage/canvas.html#the-canvas-element)
    ///
    /// Content model: transparent, but with no interactive content
    /// descendants except a few focusable form controls.
    Canvas => "canvas" {
        width: embedded::Width,
        height: embedded::Height,
    }
}
