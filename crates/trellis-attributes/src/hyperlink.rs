//! [§ 4.6 Links](https://html.spec.whatwg.org/multipage/links.html)
//!
//! Attributes of `a`, `area`, and `link`, plus the resource attributes they
//! share with other elements.

attributes! {
    string:
    /// [§ 4.6.2 Links created by a and area elements](https://html.spec.whatwg.org/multipage/links.html#attr-hyperlink-href)
    ///
    /// "The href attribute on a and area elements must have a value that is
    /// a valid URL potentially surrounded by spaces."
    ///
    /// Its presence makes `a` interactive content.
    Href => "href",
    /// [§ 4.6.2](https://html.spec.whatwg.org/multipage/links.html#attr-hyperlink-target)
    ///
    /// "The target attribute, if present, must be a valid navigable target
    /// name or keyword."
    Target => "target",
    /// [§ 4.6.5 Downloading resources](https://html.spec.whatwg.org/multipage/links.html#attr-hyperlink-download)
    ///
    /// The empty string asks for a download without suggesting a filename.
    Download => "download",
    /// [§ 4.6.6 Hyperlink auditing](https://html.spec.whatwg.org/multipage/links.html#attr-hyperlink-ping)
    Ping => "ping",
    /// [§ 4.6.6 Link types](https://html.spec.whatwg.org/multipage/links.html#linkTypes)
    ///
    /// "a set of space-separated tokens" naming link types.
    Rel => "rel",
    /// [§ 4.6.2](https://html.spec.whatwg.org/multipage/links.html#attr-hyperlink-hreflang)
    Hreflang => "hreflang",
    /// The MIME type of the linked or embedded resource. On `input` and
    /// `button` it instead selects the control's state.
    Type => "type",
    /// [§ 2.6.4 Referrer policy attributes](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#referrer-policy-attributes)
    Referrerpolicy => "referrerpolicy",
    /// [§ 2.6.1 CORS settings attributes](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#cors-settings-attributes)
    ///
    /// Enumerated: `anonymous` or `use-credentials`. The empty string means
    /// `anonymous`.
    Crossorigin => "crossorigin",
    /// [§ 4.2.4 The link element](https://html.spec.whatwg.org/multipage/semantics.html#attr-link-integrity)
    Integrity => "integrity",
    /// [§ 4.2.4 The link element](https://html.spec.whatwg.org/multipage/semantics.html#attr-link-as)
    As => "as",
    /// [§ 2.4.11 Media queries](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#mq)
    Media => "media",
    /// [§ 4.8.14 The area element](https://html.spec.whatwg.org/multipage/image-maps.html#attr-area-coords)
    ///
    /// A valid list of floating-point numbers.
    Coords => "coords",
    /// [§ 4.8.14](https://html.spec.whatwg.org/multipage/image-maps.html#attr-area-shape)
    ///
    /// Enumerated: `circle`, `default`, `poly`, or `rect`.
    Shape => "shape",
    /// [§ 2.6.3 Fetch priority attributes](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#fetch-priority-attributes)
    Fetchpriority => "fetchpriority",
    /// [§ 4.2.4](https://html.spec.whatwg.org/multipage/semantics.html#attr-link-blocking)
    Blocking => "blocking",
}

impl Rel {
    /// Join link types with single spaces.
    #[must_use]
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<S> = keywords.into_iter().collect();
        let joined: Vec<&str> = keywords
            .iter()
            .map(AsRef::as_ref)
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self::new(joined.join(" "))
    }

    /// The individual link types.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.0.split_ascii_whitespace()
    }
}

impl Target {
    /// `target="_blank"`.
    #[must_use]
    pub fn blank() -> Self {
        Self::new("_blank")
    }

    /// `target="_self"`.
    #[must_use]
    pub fn this() -> Self {
        Self::new("_self")
    }
}
