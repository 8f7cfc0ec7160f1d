//! # Record Declaration Macro
//!
//! ## csv_record!
//!
//! Declares a struct and implements [`crate::Record`] for it, producing the
//! field descriptors at compile time. Field types must implement
//! [`crate::ScalarField`], so a struct with an unsupported field type does not
//! compile.
//!
//! Each field takes an optional binding after `=>`:
//!
//! - no binding: participates in positional binding, no header name
//! - `=> "name"`: participates positionally and binds to header `name`
//! - `=> skip`: ignored by both strategies
//!
//! ### Usage
//!
//! ```
//! rowbind::csv_record! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Person {
//!         pub name: String => "name",
//!         pub age: i32 => "age",
//!         pub notes: String => skip,
//!     }
//! }
//!
//! let person = Person::default();
//! assert_eq!(rowbind::Record::descriptors(&person).len(), 3);
//! ```
//!
//! The macro derives `Default` itself; do not list it in the attributes.

/// Declares a CSV-bindable record struct.
#[macro_export]
macro_rules! csv_record {
    (@column) => {
        ::core::option::Option::None
    };
    (@column skip) => {
        ::core::option::Option::None
    };
    (@column $name:literal) => {
        ::core::option::Option::Some(::std::borrow::Cow::Borrowed($name))
    };
    (@participates) => {
        true
    };
    (@participates skip) => {
        false
    };
    (@participates $name:literal) => {
        true
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(=> $binding:tt)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Default)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn descriptors(&self) -> &[$crate::FieldDescriptor] {
                static FIELDS: &[$crate::FieldDescriptor] = &[
                    $(
                        $crate::FieldDescriptor {
                            field: ::std::borrow::Cow::Borrowed(::core::stringify!($field)),
                            column: $crate::csv_record!(@column $($binding)?),
                            participates: $crate::csv_record!(@participates $($binding)?),
                            kind: $crate::DeclaredKind::Scalar(
                                <$ty as $crate::ScalarField>::KIND,
                            ),
                            writable: true,
                        },
                    )*
                ];
                FIELDS
            }

            fn set_field(
                &mut self,
                index: usize,
                value: $crate::Value,
            ) -> ::core::result::Result<(), $crate::FieldWriteError> {
                let mut slot = 0usize;
                $(
                    if index == slot {
                        let actual = value.kind();
                        return match <$ty as $crate::ScalarField>::from_value(value) {
                            ::core::option::Option::Some(v) => {
                                self.$field = v;
                                ::core::result::Result::Ok(())
                            }
                            ::core::option::Option::None => {
                                ::core::result::Result::Err($crate::FieldWriteError::KindMismatch {
                                    expected: <$ty as $crate::ScalarField>::KIND,
                                    actual,
                                })
                            }
                        };
                    }
                    slot += 1;
                )*
                let _ = slot;
                ::core::result::Result::Err($crate::FieldWriteError::OutOfRange { index })
            }
        }
    };
}
