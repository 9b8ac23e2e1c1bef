//! [§ 4.10 Forms](https://html.spec.whatwg.org/multipage/forms.html)

use trellis_attributes::{embedded, form, hyperlink};

element! {
    /// [§ 4.10.3 The form element](https://html.spec.whatwg.org/multipage/forms.html#the-form-element)
    Form => "form" {
        action: form::Action,
        method: form::Method,
        enctype: form::Enctype,
        autocomplete: form::Autocomplete,
        name: form::Name,
        novalidate: form::Novalidate,
        target: hyperlink::Target,
        rel: hyperlink::Rel,
    }
}

element! {
    /// [§ 4.10.4 The label element](https://html.spec.whatwg.org/multipage/forms.html#the-label-element)
    Label => "label" {
        r#for: form::For,
    }
}

element! {
    /// [§ 4.10.5 The input element](https://html.spec.whatwg.org/multipage/input.html#the-input-element)
    ///
    /// Interactive and palpable content unless `type="hidden"`.
    void Input => "input" {
        r#type: hyperlink::Type,
        name: form::Name,
        value: form::Value,
        placeholder: form::Placeholder,
        autocomplete: form::Autocomplete,
        checked: form::Checked,
        disabled: form::Disabled,
        readonly: form::Readonly,
        required: form::Required,
        multiple: form::Multiple,
        pattern: form::Pattern,
        min: form::Min,
        max: form::Max,
        step: form::Step,
        minlength: form::Minlength,
        maxlength: form::Maxlength,
        size: form::Size,
        list: form::List,
        accept: form::Accept,
        form: form::Form,
        formaction: form::Formaction,
        formnovalidate: form::Formnovalidate,
        alt: embedded::Alt,
        src: embedded::Src,
        width: embedded::Width,
        height: embedded::Height,
    }
}

element! {
    /// [§ 4.10.6 The button element](https://html.spec.whatwg.org/multipage/form-elements.html#the-button-element)
    Button => "button" {
        r#type: hyperlink::Type,
        name: form::Name,
        value: form::Value,
        disabled: form::Disabled,
        form: form::Form,
        formaction: form::Formaction,
        formnovalidate: form::Formnovalidate,
    }
}

element! {
    /// [§ 4.10.7 The select element](https://html.spec.whatwg.org/multipage/form-elements.html#the-select-element)
    ///
    /// Content model: select element inner content, so `option`,
    /// `optgroup`, `hr`, and script-supporting elements.
    Select => "select" {
        name: form::Name,
        autocomplete: form::Autocomplete,
        disabled: form::Disabled,
        form: form::Form,
        multiple: form::Multiple,
        required: form::Required,
        size: form::Size,
    }
}

element! {
    /// [§ 4.10.8 The datalist element](https://html.spec.whatwg.org/multipage/form-elements.html#the-datalist-element)
    Datalist => "datalist" {}
}

element! {
    /// [§ 4.10.9 The optgroup element](https://html.spec.whatwg.org/multipage/form-elements.html#the-optgroup-element)
    Optgroup => "optgroup" {
        disabled: form::Disabled,
        label: form::Label,
    }
}

element! {
    /// [§ 4.10.10 The option element](https://html.spec.whatwg.org/multipage/form-elements.html#the-option-element)
    ///
    /// Named to stay clear of [`Option`].
    OptionElement => "option" {
        disabled: form::Disabled,
        label: form::Label,
        selected: form::Selected,
        value: form::Value,
    }
}

element! {
    /// [§ 4.10.11 The textarea element](https://html.spec.whatwg.org/multipage/form-elements.html#the-textarea-element)
    ///
    /// Content model: text.
    Textarea => "textarea" {
        name: form::Name,
        autocomplete: form::Autocomplete,
        cols: form::Cols,
        rows: form::Rows,
        wrap: form::Wrap,
        placeholder: form::Placeholder,
        disabled: form::Disabled,
        readonly: form::Readonly,
        required: form::Required,
        minlength: form::Minlength,
        maxlength: form::Maxlength,
        form: form::Form,
    }
}

element! {
    /// [§ 4.10.12 The output element](https://html.spec.whatwg.org/multipage/form-elements.html#the-output-element)
    Output => "output" {
        r#for: form::For,
        form: form::Form,
        name: form::Name,
    }
}

element! {
    /// [§ 4.10.13 The progress element](https://html.spec.whatwg.org/multipage/form-elements.html#the-progress-element)
    Progress => "progress" {
        value: form::Value,
        max: form::Max,
    }
}

element! {
    /// [§ 4.10.14 The meter element](https://html.spec.whatwg.org/multipage/form-elements.html#the-meter-element)
    Meter => "meter" {
        value: form::Value,
        min: form::Min,
        max: form::Max,
    }
}

element! {
    /// [§ 4.10.15 The fieldset element](https://html.spec.whatwg.org/multipage/form-elements.html#the-fieldset-element)
    Fieldset => "fieldset" {
        disabled: form::Disabled,
        form: form::Form,
        name: form::Name,
    }
}

element! {
    /// [§ 4.10.16 The legend element](https://html.spec.whatwg.org/multipage/form-elements.html#the-legend-element)
    Legend => "legend" {}
}
