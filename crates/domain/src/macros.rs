//! Macro for wire-level enum conversions
//!
//! Backend enums travel as lowercase strings (`"starter"`, `"yearly"`). This
//! macro gives such an enum a single source of truth for its wire spelling:
//! `as_str`, `Display`, and case-insensitive `FromStr`.
//!
//! # Example
//!
//! ```rust
//! use uplokal_domain::impl_wire_enum;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Priority {
//!     High,
//!     Low,
//! }
//!
//! impl_wire_enum!(Priority {
//!     High => "high",
//!     Low => "low",
//! });
//!
//! assert_eq!(Priority::High.as_str(), "high");
//! assert_eq!("LOW".parse::<Priority>().unwrap(), Priority::Low);
//! ```

/// Implements `as_str`, `Display` and `FromStr` for a wire enum.
///
/// Parsing is case-insensitive; output is always the declared spelling.
#[macro_export]
macro_rules! impl_wire_enum {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire spelling of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl ::core::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $enum_name {
            type Err = $crate::errors::UplokalError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($str => ::core::result::Result::Ok(Self::$variant),)+
                    _ => ::core::result::Result::Err($crate::errors::UplokalError::InvalidInput(format!(
                        "invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::errors::UplokalError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Visibility {
        Public,
        InProgress,
    }

    impl_wire_enum!(Visibility {
        Public => "public",
        InProgress => "in-progress",
    });

    #[test]
    fn display_uses_wire_spelling() {
        assert_eq!(Visibility::Public.to_string(), "public");
        assert_eq!(Visibility::InProgress.to_string(), "in-progress");
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(Visibility::from_str("PUBLIC").unwrap(), Visibility::Public);
        assert_eq!(Visibility::from_str("In-Progress").unwrap(), Visibility::InProgress);
    }

    mod with_result_alias {
        #[allow(unused_imports)]
        use crate::errors::Result;

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Cycle {
            Monthly,
        }

        impl_wire_enum!(Cycle {
            Monthly => "monthly",
        });
    }

    #[test]
    fn expands_next_to_a_result_alias() {
        use with_result_alias::Cycle;

        assert_eq!(Cycle::from_str("Monthly").unwrap(), Cycle::Monthly);
        assert_eq!(Cycle::Monthly.to_string(), "monthly");
    }

    #[test]
    fn unknown_value_is_invalid_input() {
        let err = Visibility::from_str("hidden").unwrap_err();
        assert!(matches!(err, UplokalError::InvalidInput(msg) if msg.contains("Visibility")));
    }
}
