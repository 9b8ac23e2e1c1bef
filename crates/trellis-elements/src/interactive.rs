//! [§ 4.11 Interactive elements](https://html.spec.whatwg.org/multipage/interactive-elements.html)

use trellis_attributes::document;

element! {
    /// [§ 4.11.1 The details element](https://html.spec.whatwg.org/multipage/interactive-elements.html#the-details-element)
    Details => "details" {
        name: document::Group,
        open: document::Open,
    }
}

element! {
    /// [§ 4.11.2 The summary element](https://html.spec.whatwg.org/multipage/interactive-elements.html#the-summary-element)
    Summary => "summary" {}
}

element! {
    /// [§ 4.11.4 The dialog element](https://html.spec.whatwg.org/multipage/interactive-elements.html#the-dialog-element)
    Dialog => "dialog" {
        open: document::Open,
        closedby: document::Closedby,
    }
}
