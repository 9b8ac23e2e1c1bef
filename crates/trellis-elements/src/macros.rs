//! Declarative definitions for element types.

/// Define an element type with optional attribute fields.
///
/// Prefix the type with `void` for elements that never have an end tag.
///
/// ```ignore
/// element! {
///     /// The `a` element.
///     Anchor => "a" {
///         href: hyperlink::Href,
///         target: hyperlink::Target,
///     }
/// }
///
/// element! {
///     /// The `br` element.
///     void Br => "br" {}
/// }
/// ```
#[macro_export]
macro_rules! element {
    (@define $(#[$meta:meta])* $ty:ident => $tag:literal, $void:literal, { $($field:ident: $attr:path),* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $ty {
            /// Attributes common to all elements.
            pub global: $crate::global::GlobalAttributes,
            $(
                #[doc = concat!("`", stringify!($attr), "`, if set.")]
                pub $field: ::core::option::Option<$attr>,
            )*
        }

        impl $ty {
            #[doc = concat!("A `<", $tag, ">` with no attributes.")]
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl $crate::element::Element for $ty {
            const TAG: &'static str = $tag;
            const IS_VOID: bool = $void;

            fn global(&self) -> &$crate::global::GlobalAttributes {
                &self.global
            }

            fn own_attributes(&self) -> ::std::vec::Vec<&dyn $crate::AttributeBytes> {
                let fields: &[::core::option::Option<&dyn $crate::AttributeBytes>] = &[
                    $(self.$field.as_ref().map(|attribute| attribute as &dyn $crate::AttributeBytes)),*
                ];
                fields.iter().flatten().copied().collect()
            }
        }
    };
    ($(#[$meta:meta])* void $ty:ident => $tag:literal { $($field:ident: $attr:path),* $(,)? }) => {
        $crate::element!(@define $(#[$meta])* $ty => $tag, true, { $($field: $attr),* });

        impl $crate::element::VoidElement for $ty {}
    };
    ($(#[$meta:meta])* $ty:ident => $tag:literal { $($field:ident: $attr:path),* $(,)? }) => {
        $crate::element!(@define $(#[$meta])* $ty => $tag, false, { $($field: $attr),* });
    };
}
