//! [§ 4.8 Embedded content](https://html.spec.whatwg.org/multipage/embedded-content.html)

use trellis_attributes::{embedded, form, hyperlink};

element! {
    /// [§ 4.8.1 The picture element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-picture-element)
    Picture => "picture" {}
}

element! {
    /// [§ 4.8.2 The source element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-source-element)
    void Source => "source" {
        src: embedded::Src,
        r#type: hyperlink::Type,
        srcset: embedded::Srcset,
        sizes: embedded::Sizes,
        media: hyperlink::Media,
        width: embedded::Width,
        height: embedded::Height,
    }
}

element! {
    /// [§ 4.8.3 The img element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-img-element)
    ///
    /// Interactive content only with `usemap`.
    void Img => "img" {
        alt: embedded::Alt,
        src: embedded::Src,
        srcset: embedded::Srcset,
        sizes: embedded::Sizes,
        crossorigin: hyperlink::Crossorigin,
        usemap: embedded::Usemap,
        ismap: embedded::Ismap,
        width: embedded::Width,
        height: embedded::Height,
        referrerpolicy: hyperlink::Referrerpolicy,
        decoding: embedded::Decoding,
        loading: embedded::Loading,
        fetchpriority: hyperlink::Fetchpriority,
    }
}

element! {
    /// [§ 4.8.5 The iframe element](https://html.spec.whatwg.org/multipage/iframe-embed-object.html#the-iframe-element)
    Iframe => "iframe" {
        src: embedded::Src,
        srcdoc: embedded::Srcdoc,
        name: form::Name,
        sandbox: embedded::Sandbox,
        allow: embedded::Allow,
        width: embedded::Width,
        height: embedded::Height,
        referrerpolicy: hyperlink::Referrerpolicy,
        loading: embedded::Loading,
    }
}

element! {
    /// [§ 4.8.6 The embed element](https://html.spec.whatwg.org/multipage/iframe-embed-object.html#the-embed-element)
    void Embed => "embed" {
        src: embedded::Src,
        r#type: hyperlink::Type,
        width: embedded::Width,
        height: embedded::Height,
    }
}

element! {
    /// [§ 4.8.7 The object element](https://html.spec.whatwg.org/multipage/iframe-embed-object.html#the-object-element)
    ///
    /// Content model: transparent.
    Object => "object" {
        data: embedded::Data,
        r#type: hyperlink::Type,
        name: form::Name,
        form: form::Form,
        width: embedded::Width,
        height: embedded::Height,
    }
}

element! {
    /// [§ 4.8.8 The video element](https://html.spec.whatwg.org/multipage/media.html#the-video-element)
    ///
    /// Interactive content only with `controls`.
    Video => "video" {
        src: embedded::Src,
        crossorigin: hyperlink::Crossorigin,
        poster: embedded::Poster,
        preload: embedded::Preload,
        autoplay: embedded::Autoplay,
        playsinline: embedded::Playsinline,
        r#loop: embedded::Loop,
        muted: embedded::Muted,
        controls: embedded::Controls,
        width: embedded::Width,
        height: embedded::Height,
    }
}

element! {
    /// [§ 4.8.9 The audio element](https://html.spec.whatwg.org/multipage/media.html#the-audio-element)
    ///
    /// Interactive and palpable content only with `controls`.
    Audio => "audio" {
        src: embedded::Src,
        crossorigin: hyperlink::Crossorigin,
        preload: embedded::Preload,
        autoplay: embedded::Autoplay,
        r#loop: embedded::Loop,
        muted: embedded::Muted,
        controls: embedded::Controls,
    }
}

element! {
    /// [§ 4.8.10 The track element](https://html.spec.whatwg.org/multipage/media.html#the-track-element)
    void Track => "track" {
        kind: embedded::Kind,
        src: embedded::Src,
        srclang: embedded::Srclang,
        label: form::Label,
    }
}

element! {
    /// [§ 4.8.13 The map element](https://html.spec.whatwg.org/multipage/image-maps.html#the-map-element)
    ///
    /// Content model: transparent. May straddle a paragraph boundary.
    Map => "map" {
        name: form::Name,
    }
}

element! {
    /// [§ 4.8.14 The area element](https://html.spec.whatwg.org/multipage/image-maps.html#the-area-element)
    ///
    /// Flow and phrasing content only inside a `map`.
    void Area => "area" {
        alt: embedded::Alt,
        coords: hyperlink::Coords,
        shape: hyperlink::Shape,
        href: hyperlink::Href,
        target: hyperlink::Target,
        download: hyperlink::Download,
        ping: hyperlink::Ping,
        rel: hyperlink::Rel,
        referrerpolicy: hyperlink::Referrerpolicy,
    }
}

impl Img {
    /// `<img src alt>`, the two attributes every conforming image needs.
    #[must_use]
    pub fn with_source(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: Some(embedded::Src::new(src)),
            alt: Some(embedded::Alt::new(alt)),
            ..Self::default()
        }
    }
}
