// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Declarative macros for reducing boilerplate.

/// Define a newtype name wrapper around `SmolStr`.
///
/// Pipeline identifiers are opaque interned strings: equality is the
/// only relation that matters. Generates `new()`, `as_str()`,
/// `Display`, `From` conversions, `PartialEq<str>`, `Borrow<str>`, and
/// transparent serde impls.
///
/// ```ignore
/// define_name! {
///     /// Doc comment for the name type.
///     pub struct ResourceName;
/// }
/// ```
#[macro_export]
macro_rules! define_name {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub smol_str::SmolStr);

        impl $name {
            pub fn new(name: impl AsRef<str>) -> Self {
                Self(smol_str::SmolStr::new(name.as_ref()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(smol_str::SmolStr::from(s))
            }
        }

        impl From<&String> for $name {
            fn from(s: &String) -> Self {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}
