//! [§ 4.8 Embedded content](https://html.spec.whatwg.org/multipage/embedded-content.html)

attributes! {
    string:
    /// The URL of the resource to embed. "must be present, and must contain
    /// a valid non-empty URL potentially surrounded by spaces" on `img`.
    Src => "src",
    /// [§ 4.8.4.2 Attributes common to source, img, and link elements](https://html.spec.whatwg.org/multipage/images.html#srcset-attributes)
    Srcset => "srcset",
    /// [§ 4.8.4.2](https://html.spec.whatwg.org/multipage/images.html#sizes-attributes)
    Sizes => "sizes",
    /// [§ 4.8.4.4 Requirements for providing text to act as an alternative for images](https://html.spec.whatwg.org/multipage/images.html#alt)
    ///
    /// `alt=""` is meaningful: it marks the image as decorative. It is a
    /// different statement from leaving the attribute out.
    Alt => "alt",
    /// [§ 2.6.2 Lazy loading attributes](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#lazy-loading-attributes)
    ///
    /// Enumerated: `lazy` or `eager`.
    Loading => "loading",
    /// [§ 4.8.4.3](https://html.spec.whatwg.org/multipage/images.html#dom-img-decoding)
    ///
    /// Enumerated: `sync`, `async`, or `auto`.
    Decoding => "decoding",
    /// [§ 4.8.15 Image maps](https://html.spec.whatwg.org/multipage/image-maps.html#attr-hyperlink-usemap)
    ///
    /// "a valid hash-name reference to a map element". Its presence makes
    /// `img` interactive content.
    Usemap => "usemap",
    /// [§ 4.8.18 Dimension attributes](https://html.spec.whatwg.org/multipage/embedded-content-other.html#dimension-attributes)
    Width => "width",
    /// [§ 4.8.18 Dimension attributes](https://html.spec.whatwg.org/multipage/embedded-content-other.html#dimension-attributes)
    Height => "height",
    /// [§ 4.8.9 The video element](https://html.spec.whatwg.org/multipage/media.html#attr-video-poster)
    Poster => "poster",
    /// [§ 4.8.11.5](https://html.spec.whatwg.org/multipage/media.html#attr-media-preload)
    ///
    /// Enumerated: `none`, `metadata`, or `auto`.
    Preload => "preload",
    /// [§ 4.8.11 The track element](https://html.spec.whatwg.org/multipage/media.html#attr-track-kind)
    Kind => "kind",
    /// [§ 4.8.11](https://html.spec.whatwg.org/multipage/media.html#attr-track-srclang)
    Srclang => "srclang",
    /// [§ 4.8.5 The iframe element](https://html.spec.whatwg.org/multipage/iframe-embed-object.html#attr-iframe-sandbox)
    Sandbox => "sandbox",
    /// [§ 4.8.5](https://html.spec.whatwg.org/multipage/iframe-embed-object.html#attr-iframe-allow)
    Allow => "allow",
    /// [§ 4.8.5](https://html.spec.whatwg.org/multipage/iframe-embed-object.html#attr-iframe-srcdoc)
    Srcdoc => "srcdoc",
    /// [§ 4.8.7 The object element](https://html.spec.whatwg.org/multipage/iframe-embed-object.html#attr-object-data)
    Data => "data",
}

attributes! {
    boolean:
    /// [§ 4.8.4.3](https://html.spec.whatwg.org/multipage/images.html#attr-img-ismap)
    ///
    /// "The ismap attribute, when used on an element that is a descendant of
    /// an a element with an href attribute, indicates by its presence that
    /// the element provides access to a server-side image map."
    Ismap => "ismap",
    /// [§ 4.8.11.13 User interface](https://html.spec.whatwg.org/multipage/media.html#attr-media-controls)
    ///
    /// Its presence makes `audio` and `video` interactive content.
    Controls => "controls",
    /// [§ 4.8.11.8](https://html.spec.whatwg.org/multipage/media.html#attr-media-autoplay)
    Autoplay => "autoplay",
    /// [§ 4.8.11.6](https://html.spec.whatwg.org/multipage/media.html#attr-media-loop)
    Loop => "loop",
    /// [§ 4.8.11.13](https://html.spec.whatwg.org/multipage/media.html#attr-media-muted)
    Muted => "muted",
    /// [§ 4.8.9](https://html.spec.whatwg.org/multipage/media.html#attr-video-playsinline)
    Playsinline => "playsinline",
}

impl Width {
    /// `width` in CSS pixels.
    #[must_use]
    pub fn from_int(pixels: u32) -> Self {
        Self::new(pixels.to_string())
    }
}

impl Height {
    /// `height` in CSS pixels.
    #[must_use]
    pub fn from_int(pixels: u32) -> Self {
        Self::new(pixels.to_string())
    }
}

impl Loading {
    /// `loading="lazy"`.
    #[must_use]
    pub fn lazy() -> Self {
        Self::new("lazy")
    }

    /// `loading="eager"`.
    #[must_use]
    pub fn eager() -> Self {
        Self::new("eager")
    }
}
