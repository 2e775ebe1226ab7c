//! Macro for declaring widget catalogs.

/// Declare a catalog enum together with its [`WidgetCatalog`] implementation.
///
/// ```ignore
/// widget_catalog! {
///     pub enum WidgetName in V2 {
///         Offers => "offers-2",
///     }
/// }
/// ```
///
/// Besides the trait, the generated enum gets `Display` (the selector),
/// `FromStr` (reverse lookup, `CatalogError::UnknownSelector` on a miss) and
/// serde support through the selector string.
///
/// [`WidgetCatalog`]: crate::catalog::WidgetCatalog
macro_rules! widget_catalog {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $version:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $selector:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::catalog::WidgetCatalog for $name {
            const VERSION: $crate::catalog::CatalogVersion = $crate::catalog::CatalogVersion::$version;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn selector(self) -> &'static str {
                match self {
                    $($name::$variant => $selector,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }

            fn index() -> &'static $crate::catalog::SelectorIndex<Self> {
                static INDEX: ::once_cell::sync::Lazy<$crate::catalog::SelectorIndex<$name>> =
                    ::once_cell::sync::Lazy::new($crate::catalog::SelectorIndex::<$name>::for_catalog);
                &INDEX
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::catalog::WidgetCatalog::selector(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::catalog::CatalogError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::catalog::WidgetCatalog>::parse_selector(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::catalog::WidgetCatalog::selector(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let selector = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                selector.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use widget_catalog;
