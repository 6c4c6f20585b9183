//! # Option Ranges
//!
//! Closed enumerations of build-time options (boundary model, viscous model,
//! turbulence model, ...) from which axis predicates are written.
//!
//! `#[derive(OptionRange)]` on a fieldless enum provides:
//! - the [`OptionRange`] impl (variants in declaration order, their names),
//! - `const fn index(self)` and `const fn is(self, other)`, usable inside
//!   `cond_struct!` and `Truth<{ .. }>`,
//! - `FromStr` (through [`OptionRange::parse_option`]) and `Display`.
//!
//! `#[option(min = Variant, max = Variant)]` on the enum restricts the valid
//! range, leaving sentinel values out of parsing and iteration.
//!
//! ```
//! use cond_params::{cond_struct, Component, OptionRange};
//!
//! #[derive(OptionRange, Debug, Clone, Copy, PartialEq)]
//! enum BoundaryType {
//!     #[option(name = "Lennard-Jones")]
//!     LjBoundary,
//!     #[option(name = "Semi-analytical")]
//!     SaBoundary,
//! }
//!
//! #[derive(Component)]
//! struct SaParams { gam_n: f32 }
//!
//! const BOUNDARY: BoundaryType = BoundaryType::SaBoundary;
//! type Slot = cond_struct!(BOUNDARY.is(BoundaryType::SaBoundary), SaParams);
//!
//! let slot: Slot = SaParams { gam_n: 1.0 };
//! assert_eq!(slot.gam_n, 1.0);
//! assert_eq!("semi".parse::<BoundaryType>(), Ok(BoundaryType::SaBoundary));
//! assert_eq!(BoundaryType::LjBoundary.to_string(), "Lennard-Jones");
//! ```

use alloc::string::{String, ToString};
use thiserror::Error;

/// Failure to read an option value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("empty value for {option}")]
    Empty { option: &'static str },

    #[error("{input} is not a valid {option}")]
    Unknown { option: &'static str, input: String },

    #[error("{input} is ambiguous for {option}: matches both {first} and {second}")]
    Ambiguous {
        option: &'static str,
        input: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("{value} not in [{min} {max}] for {option}")]
    OutOfRange {
        option: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

/// A closed, ordered set of option values with user-visible names.
///
/// The valid range is `VARIANTS[MIN_INDEX..=MAX_INDEX]`; values outside it
/// (sentinels such as an "invalid" marker) keep their names but are never
/// parsed, listed or accepted by index.
pub trait OptionRange: Copy + 'static {
    /// Name of the option type, used in error messages.
    const OPTION: &'static str;

    /// Every value, in declaration order.
    const VARIANTS: &'static [Self];

    /// `NAMES[i]` names `VARIANTS[i]`.
    const NAMES: &'static [&'static str];

    /// First valid index.
    const MIN_INDEX: usize = 0;

    /// Last valid index.
    const MAX_INDEX: usize = Self::VARIANTS.len() - 1;

    /// Position of `self` in [`VARIANTS`](Self::VARIANTS).
    fn index(self) -> usize;

    fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// The valid values, in order.
    fn values() -> &'static [Self] {
        &Self::VARIANTS[Self::MIN_INDEX..=Self::MAX_INDEX]
    }

    /// First value of the range.
    fn range_min() -> Self {
        Self::VARIANTS[Self::MIN_INDEX]
    }

    /// Last value of the range.
    fn range_max() -> Self {
        Self::VARIANTS[Self::MAX_INDEX]
    }

    fn is_in_range(index: usize) -> bool {
        (Self::MIN_INDEX..=Self::MAX_INDEX).contains(&index)
    }

    fn from_index(index: usize) -> Result<Self, OptionError> {
        if !Self::is_in_range(index) {
            return Err(OptionError::OutOfRange {
                option: Self::OPTION,
                value: index,
                min: Self::MIN_INDEX,
                max: Self::MAX_INDEX,
            });
        }
        Ok(Self::VARIANTS[index])
    }

    /// Read a value from user input.
    ///
    /// A leading digit selects by index. Anything else is compared, ignoring
    /// case, against the names in range: an exact match wins, otherwise the
    /// input must be a prefix of exactly one name.
    fn parse_option(input: &str) -> Result<Self, OptionError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(OptionError::Empty { option: Self::OPTION });
        }

        if input.starts_with(|c: char| c.is_ascii_digit()) {
            let index = input.parse::<usize>().map_err(|_| OptionError::Unknown {
                option: Self::OPTION,
                input: input.to_string(),
            })?;
            return Self::from_index(index);
        }

        let names = Self::NAMES
            .iter()
            .enumerate()
            .take(Self::MAX_INDEX + 1)
            .skip(Self::MIN_INDEX);

        if let Some((pos, _)) = names.clone().find(|(_, name)| name.eq_ignore_ascii_case(input)) {
            return Ok(Self::VARIANTS[pos]);
        }

        let mut matches = names.filter(|(_, name)| starts_with_ignore_case(name, input));

        match (matches.next(), matches.next()) {
            (Some((pos, _)), None) => Ok(Self::VARIANTS[pos]),
            (Some((_, first)), Some((_, second))) => Err(OptionError::Ambiguous {
                option: Self::OPTION,
                input: input.to_string(),
                first: *first,
                second: *second,
            }),
            (None, _) => Err(OptionError::Unknown {
                option: Self::OPTION,
                input: input.to_string(),
            }),
        }
    }
}

fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.len() >= prefix.len()
        && name.is_char_boundary(prefix.len())
        && name[..prefix.len()].eq_ignore_ascii_case(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Average {
        Arithmetic,
        Harmonic,
        Geometric,
    }

    impl OptionRange for Average {
        const OPTION: &'static str = "Average";
        const VARIANTS: &'static [Self] = &[Average::Arithmetic, Average::Harmonic, Average::Geometric];
        const NAMES: &'static [&'static str] = &["Arithmetic", "Harmonic", "Geometric"];

        fn index(self) -> usize {
            self as usize
        }
    }

    #[test]
    fn test_prefix_and_case() {
        assert_eq!(Average::parse_option("harm"), Ok(Average::Harmonic));
        assert_eq!(Average::parse_option("  GEOMETRIC "), Ok(Average::Geometric));
        assert_eq!(Average::parse_option("a"), Ok(Average::Arithmetic));
    }

    #[test]
    fn test_numeric_index() {
        assert_eq!(Average::parse_option("2"), Ok(Average::Geometric));
        assert_eq!(
            Average::parse_option("3"),
            Err(OptionError::OutOfRange { option: "Average", value: 3, min: 0, max: 2 })
        );
        assert!(matches!(Average::parse_option("1x"), Err(OptionError::Unknown { .. })));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(Average::parse_option("   "), Err(OptionError::Empty { option: "Average" }));

        let err = Average::parse_option("median").unwrap_err();
        assert_eq!(err.to_string(), "median is not a valid Average");
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Turbulence {
        Invalid,
        Laminar,
        KEpsilon,
        Sentinel,
    }

    impl OptionRange for Turbulence {
        const OPTION: &'static str = "Turbulence";
        const VARIANTS: &'static [Self] = &[
            Turbulence::Invalid,
            Turbulence::Laminar,
            Turbulence::KEpsilon,
            Turbulence::Sentinel,
        ];
        const NAMES: &'static [&'static str] = &["(invalid)", "Laminar", "k-epsilon", "(sentinel)"];
        const MIN_INDEX: usize = 1;
        const MAX_INDEX: usize = 2;

        fn index(self) -> usize {
            self as usize
        }
    }

    #[test]
    fn test_subrange_excludes_sentinels() {
        assert_eq!(Turbulence::range_min(), Turbulence::Laminar);
        assert_eq!(Turbulence::range_max(), Turbulence::KEpsilon);
        assert_eq!(Turbulence::values(), &[Turbulence::Laminar, Turbulence::KEpsilon]);
        assert!(!Turbulence::is_in_range(0));
        assert!(!Turbulence::is_in_range(3));

        assert_eq!(
            Turbulence::parse_option("3"),
            Err(OptionError::OutOfRange { option: "Turbulence", value: 3, min: 1, max: 2 })
        );
        assert!(Turbulence::parse_option("0").is_err());
        assert!(matches!(Turbulence::parse_option("(inv"), Err(OptionError::Unknown { .. })));
        assert!(matches!(Turbulence::parse_option("(sentinel)"), Err(OptionError::Unknown { .. })));
        assert_eq!(Turbulence::parse_option("1"), Ok(Turbulence::Laminar));
        assert_eq!(Turbulence::parse_option("k"), Ok(Turbulence::KEpsilon));
        assert_eq!(Turbulence::Sentinel.name(), "(sentinel)");
    }

    #[test]
    fn test_range() {
        assert_eq!(Average::range_min(), Average::Arithmetic);
        assert_eq!(Average::range_max(), Average::Geometric);
        assert!(Average::is_in_range(2));
        assert!(!Average::is_in_range(3));
        assert_eq!(Average::Harmonic.name(), "Harmonic");
    }
}
