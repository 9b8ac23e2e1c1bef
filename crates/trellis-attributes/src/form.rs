//! [§ 4.10 Forms](https://html.spec.whatwg.org/multipage/forms.html)
//!
//! Numeric constructors here come in pairs. `from_*` treats an out-of-range
//! value as a programmer error and panics; `try_from_*` reports it.

use crate::attribute::Attribute;
use crate::error::{AttributeError, check_range, expect_valid};

attributes! {
    string:
    /// [§ 4.10.3 The form element](https://html.spec.whatwg.org/multipage/forms.html#attr-fs-action)
    Action => "action",
    /// [§ 4.10.18.6 Form submission](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fs-method)
    ///
    /// Enumerated: `get`, `post`, or `dialog`.
    Method => "method",
    /// [§ 4.10.18.6](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fs-enctype)
    Enctype => "enctype",
    /// [§ 4.10.18.7 Autofill](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fe-autocomplete)
    Autocomplete => "autocomplete",
    /// [§ 4.10.18.1 Naming form controls: the name attribute](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fe-name)
    Name => "name",
    /// The value of a form control, option, list item, data, or meter.
    Value => "value",
    /// [§ 4.10.5.3.10](https://html.spec.whatwg.org/multipage/input.html#attr-input-placeholder)
    Placeholder => "placeholder",
    /// [§ 4.10.5.3.6 The pattern attribute](https://html.spec.whatwg.org/multipage/input.html#attr-input-pattern)
    Pattern => "pattern",
    /// [§ 4.10.5.3.7 The min and max attributes](https://html.spec.whatwg.org/multipage/input.html#attr-input-max)
    ///
    /// Any string is accepted; [`Max::from_number`] produces a valid
    /// floating-point number.
    Max => "max",
    /// [§ 4.10.5.3.7 The min and max attributes](https://html.spec.whatwg.org/multipage/input.html#attr-input-min)
    Min => "min",
    /// [§ 4.10.5.3.8 The step attribute](https://html.spec.whatwg.org/multipage/input.html#attr-input-step)
    ///
    /// A positive number or `any`.
    Step => "step",
    /// [§ 4.10.18.3 Limiting user input length: the maxlength attribute](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fe-maxlength)
    Maxlength => "maxlength",
    /// [§ 4.10.18.4 Setting minimum input length requirements: the minlength attribute](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fe-minlength)
    Minlength => "minlength",
    /// `size` of `input` and `select`, and of the obsolete `font` element,
    /// whose scale runs from 1 to 7.
    Size => "size",
    /// [§ 4.10.4 The label element](https://html.spec.whatwg.org/multipage/forms.html#attr-label-for)
    ///
    /// The ID of the labeled control.
    For => "for",
    /// [§ 4.10.17.3 Association of controls and forms](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fae-form)
    Form => "form",
    /// [§ 4.10.18.6](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fs-formaction)
    Formaction => "formaction",
    /// [§ 4.10.5.3.9 The list attribute](https://html.spec.whatwg.org/multipage/input.html#attr-input-list)
    List => "list",
    /// [§ 4.10.5.3.1 The accept attribute](https://html.spec.whatwg.org/multipage/input.html#attr-input-accept)
    Accept => "accept",
    /// [§ 4.10.11 The textarea element](https://html.spec.whatwg.org/multipage/form-elements.html#attr-textarea-cols)
    Cols => "cols",
    /// [§ 4.10.11](https://html.spec.whatwg.org/multipage/form-elements.html#attr-textarea-rows)
    Rows => "rows",
    /// [§ 4.10.11](https://html.spec.whatwg.org/multipage/form-elements.html#attr-textarea-wrap)
    ///
    /// Enumerated: `soft` or `hard`.
    Wrap => "wrap",
    /// A user-visible label for `option`, `optgroup`, and `track`.
    Label => "label",
}

attributes! {
    boolean:
    /// [§ 4.10.18.5 Enabling and disabling form controls: the disabled attribute](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fe-disabled)
    Disabled => "disabled",
    /// [§ 4.10.5.1](https://html.spec.whatwg.org/multipage/input.html#attr-input-checked)
    ///
    /// "The checked content attribute is a boolean attribute that gives the
    /// default checkedness of the input element."
    Checked => "checked",
    /// [§ 4.10.5.3.3 The readonly attribute](https://html.spec.whatwg.org/multipage/input.html#attr-input-readonly)
    Readonly => "readonly",
    /// [§ 4.10.5.3.4 The required attribute](https://html.spec.whatwg.org/multipage/input.html#attr-input-required)
    Required => "required",
    /// [§ 4.10.5.3.5 The multiple attribute](https://html.spec.whatwg.org/multipage/input.html#attr-input-multiple)
    Multiple => "multiple",
    /// [§ 4.10.10 The option element](https://html.spec.whatwg.org/multipage/form-elements.html#attr-option-selected)
    Selected => "selected",
    /// [§ 4.10.18.6](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fs-novalidate)
    Novalidate => "novalidate",
    /// [§ 4.10.18.6](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fs-formnovalidate)
    Formnovalidate => "formnovalidate",
}

/// Largest integer accepted where a "valid non-negative integer" is asked
/// for and no tighter bound is given.
const NON_NEGATIVE_MAX: i64 = 2_147_483_647;

integer_constructors!(Maxlength, 0, NON_NEGATIVE_MAX);
integer_constructors!(Minlength, 0, NON_NEGATIVE_MAX);
// "If the attribute is specified, the value must be a valid non-negative
// integer greater than zero."
integer_constructors!(Size, 1, NON_NEGATIVE_MAX);
integer_constructors!(Cols, 1, NON_NEGATIVE_MAX);
integer_constructors!(Rows, 1, NON_NEGATIVE_MAX);

float_constructors!(Max);
float_constructors!(Min);
float_constructors!(Step);

impl Size {
    /// Legacy `font` size on the 1–7 scale, 3 being the default.
    ///
    /// # Panics
    ///
    /// Panics if `scale` is outside 1..=7.
    #[must_use]
    #[track_caller]
    pub fn font_scale(scale: u8) -> Self {
        expect_valid(Self::try_font_scale(scale))
    }

    /// Legacy `font` size on the 1–7 scale.
    ///
    /// # Errors
    ///
    /// [`AttributeError::OutOfRange`] if `scale` is outside 1..=7.
    pub fn try_font_scale(scale: u8) -> Result<Self, AttributeError> {
        check_range(Self::NAME, i64::from(scale), 1, 7).map(|scale| Self::new(scale.to_string()))
    }
}

impl Step {
    /// `step="any"`: no allowed-value step.
    #[must_use]
    pub fn any() -> Self {
        Self::new("any")
    }
}

impl Method {
    /// `method="get"`.
    #[must_use]
    pub fn get() -> Self {
        Self::new("get")
    }

    /// `method="post"`.
    #[must_use]
    pub fn post() -> Self {
        Self::new("post")
    }
}
