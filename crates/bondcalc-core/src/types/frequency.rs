//! Payment frequency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Payment frequency for coupon bonds.
///
/// The number of periods per year doubles as the yield divisor `k` used
/// both for per-period discounting and for converting Macaulay duration
/// into modified duration.
///
/// Serialized as its display name; deserialized through [`FromStr`], so an
/// unknown tag surfaces as [`CoreError::UnsupportedFrequency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        match self {
            Frequency::Annual => 12,
            Frequency::SemiAnnual => 6,
            Frequency::Quarterly => 3,
            Frequency::Monthly => 1,
        }
    }

    /// Returns all supported frequencies.
    #[must_use]
    pub fn all() -> &'static [Frequency] {
        &[
            Frequency::Annual,
            Frequency::SemiAnnual,
            Frequency::Quarterly,
            Frequency::Monthly,
        ]
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    /// Parses a frequency from its name or its periods-per-year count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1" | "ANNUAL" | "A" => Ok(Frequency::Annual),
            "2" | "SEMIANNUAL" | "SEMI-ANNUAL" | "SEMI_ANNUAL" | "S" => Ok(Frequency::SemiAnnual),
            "4" | "QUARTERLY" | "Q" => Ok(Frequency::Quarterly),
            "12" | "MONTHLY" | "M" => Ok(Frequency::Monthly),
            _ => Err(CoreError::unsupported_frequency(s)),
        }
    }
}

impl TryFrom<u32> for Frequency {
    type Error = CoreError;

    fn try_from(periods_per_year: u32) -> Result<Self, Self::Error> {
        match periods_per_year {
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            4 => Ok(Frequency::Quarterly),
            12 => Ok(Frequency::Monthly),
            other => Err(CoreError::unsupported_frequency(other.to_string())),
        }
    }
}

impl TryFrom<String> for Frequency {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Frequency> for String {
    fn from(freq: Frequency) -> Self {
        freq.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_periods_and_months_cover_a_year() {
        for freq in Frequency::all() {
            assert_eq!(freq.periods_per_year() * freq.months_per_period(), 12);
        }
    }

    #[test]
    fn test_parse_names_and_counts() {
        assert_eq!("2".parse::<Frequency>().unwrap(), Frequency::SemiAnnual);
        assert_eq!("semiannual".parse::<Frequency>().unwrap(), Frequency::SemiAnnual);
        assert_eq!("Quarterly".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert_eq!(Frequency::try_from(12).unwrap(), Frequency::Monthly);
    }

    #[test]
    fn test_unsupported_frequency() {
        assert_eq!(
            "weekly".parse::<Frequency>(),
            Err(CoreError::unsupported_frequency("weekly"))
        );
        assert!(matches!(
            Frequency::try_from(3),
            Err(CoreError::UnsupportedFrequency { .. })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for freq in Frequency::all() {
            assert_eq!(freq.to_string().parse::<Frequency>().unwrap(), *freq);
        }
    }

    #[test]
    fn test_serde_rejects_unknown_tag() {
        let freq: Frequency = serde_json::from_str("\"Monthly\"").unwrap();
        assert_eq!(freq, Frequency::Monthly);

        let err = serde_json::from_str::<Frequency>("\"fortnightly\"").unwrap_err();
        assert!(err.to_string().contains("Unsupported payment frequency"));
    }
}
