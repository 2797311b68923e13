//! Salary text handling for the salary range filter.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::FilterError;

// A number with optional thousands separators ("50,000") or a bare run of digits.
static SALARY_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,3}(?:,\d{3})+|\d+").expect("salary pattern is valid")
});

/// Extracts the lower bound from free-form salary text.
///
/// The first number found is taken as the floor, so a range such as
/// `"Ksh50,000 - Ksh70,000"` yields `50000`. Text without digits, or with a
/// number too large to represent, yields `0`.
pub fn salary_floor(salary_raw: &str) -> u64 {
    let Some(matched) = SALARY_NUMBER.find(salary_raw) else {
        return 0;
    };

    let clean_number: String = matched
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    clean_number.parse().unwrap_or(0)
}

/// A salary filter as offered by the salary dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryRange {
    /// `"min-max"`, inclusive on both ends.
    Between { min: u64, max: u64 },
    /// Open-ended `"min+"`, e.g. `"150000+"`.
    AtLeast(u64),
}

impl SalaryRange {
    pub fn contains(&self, floor: u64) -> bool {
        match *self {
            SalaryRange::Between { min, max } => floor >= min && floor <= max,
            SalaryRange::AtLeast(min) => floor >= min,
        }
    }

    /// Parses raw dropdown input; an empty value means no salary filter.
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, FilterError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}

impl FromStr for SalaryRange {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = || FilterError::InvalidSalaryRange(s.to_string());
        let parse = |part: &str| part.trim().parse::<u64>().map_err(|_| invalid());

        if let Some(min) = raw.strip_suffix('+') {
            return Ok(SalaryRange::AtLeast(parse(min)?));
        }

        let (min, max) = raw.split_once('-').ok_or_else(invalid)?;
        let (min, max) = (parse(min)?, parse(max)?);
        if min > max {
            return Err(invalid());
        }
        Ok(SalaryRange::Between { min, max })
    }
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalaryRange::Between { min, max } => write!(f, "{min}-{max}"),
            SalaryRange::AtLeast(min) => write!(f, "{min}+"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_of_shilling_range() {
        assert_eq!(salary_floor("Ksh50,000 - Ksh70,000"), 50000);
        assert_eq!(salary_floor("Ksh180,000 - Ksh200,000"), 180000);
    }

    #[test]
    fn test_floor_with_dollar_sign() {
        assert_eq!(salary_floor("$120,000/year"), 120000);
    }

    #[test]
    fn test_floor_without_separators() {
        assert_eq!(salary_floor("Salary: 60000 KES"), 60000);
    }

    #[test]
    fn test_floor_of_text_without_digits() {
        assert_eq!(salary_floor("Competitive"), 0);
        assert_eq!(salary_floor(""), 0);
    }

    #[test]
    fn test_floor_overflow_degrades_to_zero() {
        assert_eq!(salary_floor("99999999999999999999999"), 0);
    }

    #[test]
    fn test_parse_ranges() {
        assert_eq!(
            "50000-70000".parse::<SalaryRange>(),
            Ok(SalaryRange::Between { min: 50000, max: 70000 })
        );
        assert_eq!("150000+".parse::<SalaryRange>(), Ok(SalaryRange::AtLeast(150000)));
        assert_eq!(SalaryRange::parse_optional("  "), Ok(None));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["abc", "70000-50000", "50000-", "+", "50k-70k"] {
            assert_eq!(
                raw.parse::<SalaryRange>(),
                Err(FilterError::InvalidSalaryRange(raw.to_string())),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_display_matches_dropdown_values() {
        for raw in ["50000-70000", "150000+"] {
            assert_eq!(raw.parse::<SalaryRange>().unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let range = SalaryRange::Between { min: 50000, max: 70000 };
        assert!(range.contains(50000));
        assert!(range.contains(70000));
        assert!(!range.contains(70001));
        assert!(!range.contains(0));
        assert!(SalaryRange::AtLeast(150000).contains(150000));
        assert!(!SalaryRange::AtLeast(150000).contains(149999));
    }
}
