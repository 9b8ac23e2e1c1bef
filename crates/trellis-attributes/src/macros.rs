//! Declarative definitions for attribute types.
//!
//! Each HTML attribute is a newtype with the same handful of impls; these
//! macros write them from a name and a doc comment.

/// Define a boolean attribute type.
///
/// ```ignore
/// boolean_attribute! {
///     /// The `disabled` attribute.
///     Disabled => "disabled"
/// }
/// ```
#[macro_export]
macro_rules! boolean_attribute {
    ($(#[$meta:meta])* $ty:ident => $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty(bool);

        impl $ty {
            #[doc = concat!("`", $name, "` with the given state.")]
            #[must_use]
            pub const fn new(value: bool) -> Self {
                Self(value)
            }
        }

        impl $crate::attribute::Attribute for $ty {
            const NAME: &'static str = $name;
        }

        impl $crate::attribute::BooleanAttribute for $ty {
            fn from_raw(value: bool) -> Self {
                Self(value)
            }

            fn value(&self) -> bool {
                self.0
            }
        }

        impl ::core::default::Default for $ty {
            fn default() -> Self {
                Self(true)
            }
        }

        impl ::core::convert::From<bool> for $ty {
            fn from(value: bool) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<$ty> for bool {
            fn from(attribute: $ty) -> Self {
                attribute.0
            }
        }

        impl ::core::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl $crate::attribute::AttributeBytes for $ty {
            fn attribute_name(&self) -> &str {
                $name
            }

            fn attribute_value(&self) -> ::core::option::Option<&str> {
                self.0.then_some("")
            }

            fn serialized_len(&self) -> usize {
                $crate::serialize::boolean_len($name, self.0)
            }

            fn write_bytes(&self, out: &mut ::std::vec::Vec<u8>) {
                $crate::serialize::write_boolean($name, self.0, out);
            }
        }
    };
}

/// Define a string attribute type.
///
/// ```ignore
/// string_attribute! {
///     /// The `href` attribute.
///     Href => "href"
/// }
/// ```
#[macro_export]
macro_rules! string_attribute {
    ($(#[$meta:meta])* $ty:ident => $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty(::std::string::String);

        impl $ty {
            #[doc = concat!("`", $name, "` with the given value.")]
            #[must_use]
            pub fn new(value: impl ::core::convert::Into<::std::string::String>) -> Self {
                Self(value.into())
            }

            /// The wrapped value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl $crate::attribute::Attribute for $ty {
            const NAME: &'static str = $name;
        }

        impl $crate::attribute::StringAttribute for $ty {
            fn from_raw(value: ::std::string::String) -> Self {
                Self(value)
            }

            fn into_inner(self) -> ::std::string::String {
                self.0
            }
        }

        impl ::core::convert::AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::ops::Deref for $ty {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::convert::From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl ::core::convert::From<::std::string::String> for $ty {
            fn from(value: ::std::string::String) -> Self {
                Self(value)
            }
        }

        impl ::core::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl $crate::attribute::AttributeBytes for $ty {
            fn attribute_name(&self) -> &str {
                $name
            }

            fn attribute_value(&self) -> ::core::option::Option<&str> {
                ::core::option::Option::Some(&self.0)
            }

            fn serialized_len(&self) -> usize {
                $crate::serialize::string_len($name, &self.0)
            }

            fn write_bytes(&self, out: &mut ::std::vec::Vec<u8>) {
                $crate::serialize::write_string($name, &self.0, out);
            }
        }
    };
}

/// Define several attribute types of one discipline in a row.
#[macro_export]
macro_rules! attributes {
    (boolean: $($(#[$meta:meta])* $ty:ident => $name:literal),* $(,)?) => {
        $($crate::boolean_attribute! { $(#[$meta])* $ty => $name })*
    };
    (string: $($(#[$meta:meta])* $ty:ident => $name:literal),* $(,)?) => {
        $($crate::string_attribute! { $(#[$meta])* $ty => $name })*
    };
}

/// `from_int` / `try_from_int` for an integer attribute with a range.
macro_rules! integer_constructors {
    ($ty:ident, $min:expr, $max:expr) => {
        impl $ty {
            /// From an integer inside the attribute's range.
            ///
            /// # Panics
            ///
            /// Panics if `value` is out of range.
            #[must_use]
            #[track_caller]
            pub fn from_int(value: i64) -> Self {
                $crate::error::expect_valid(Self::try_from_int(value))
            }

            /// From an integer inside the attribute's range.
            ///
            /// # Errors
            ///
            /// [`AttributeError::OutOfRange`](crate::error::AttributeError::OutOfRange)
            /// if `value` is out of range.
            pub fn try_from_int(value: i64) -> Result<Self, $crate::error::AttributeError> {
                $crate::error::check_range(
                    <Self as $crate::attribute::Attribute>::NAME,
                    value,
                    $min,
                    $max,
                )
                .map(|value| Self::new(value.to_string()))
            }
        }
    };
}

/// `from_number` / `try_from_number` for a floating-point attribute.
macro_rules! float_constructors {
    ($ty:ident) => {
        impl $ty {
            /// From a finite floating-point number.
            ///
            /// # Panics
            ///
            /// Panics if `value` is NaN or infinite.
            #[must_use]
            #[track_caller]
            pub fn from_number(value: f64) -> Self {
                $crate::error::expect_valid(Self::try_from_number(value))
            }

            /// From a finite floating-point number.
            ///
            /// # Errors
            ///
            /// [`AttributeError::NotFinite`](crate::error::AttributeError::NotFinite)
            /// if `value` is NaN or infinite.
            pub fn try_from_number(value: f64) -> Result<Self, $crate::error::AttributeError> {
                $crate::error::check_finite(<Self as $crate::attribute::Attribute>::NAME, value)
                    .map(|value| Self::new(value.to_string()))
            }
        }
    };
}
