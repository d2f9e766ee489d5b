//! Sets of explicitly disabled calendar dates.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{MonthCalError, MonthCalResult};

/// Dates that are forced invisible in the grid regardless of range
/// membership.
///
/// Keys parse leniently: `2024-03-05`, `2024-3-5`, and any mix of padded and
/// unpadded components resolve to the same date. Storage is canonical
/// `NaiveDate`, so no key-format asymmetry can leak into lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisabledDays(HashSet<NaiveDate>);

impl DisabledDays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `year-month-day` keys.
    pub fn from_keys<I, S>(keys: I) -> MonthCalResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut days = HashSet::new();
        for key in keys {
            days.insert(parse_key(key.as_ref())?);
        }
        Ok(DisabledDays(days))
    }

    pub fn insert(&mut self, date: NaiveDate) {
        self.0.insert(date);
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<NaiveDate> for DisabledDays {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        DisabledDays(iter.into_iter().collect())
    }
}

/// Parse a `year-month-day` key, accepting unpadded components.
fn parse_key(key: &str) -> MonthCalResult<NaiveDate> {
    let invalid = || MonthCalError::InvalidDateKey(key.to_string());

    let mut parts = key.splitn(3, '-');
    let year = parts
        .next()
        .and_then(|p| p.parse::<i32>().ok())
        .ok_or_else(invalid)?;
    let month = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let day = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_and_unpadded_keys_resolve_to_same_date() {
        let days = DisabledDays::from_keys(["2024-03-05", "2024-3-15"]).unwrap();
        assert!(days.contains(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()));
        assert!(days.contains(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
        assert_eq!(days.len(), 2);
    }

    #[test]
    fn test_duplicate_keys_collapse() {
        let days = DisabledDays::from_keys(["2024-03-05", "2024-3-5"]).unwrap();
        assert_eq!(days.len(), 1);
    }

    #[test]
    fn test_invalid_keys_are_rejected() {
        for key in ["", "2024-03", "2024-13-01", "2024-02-30", "not-a-date"] {
            let result = DisabledDays::from_keys([key]);
            assert!(result.is_err(), "expected '{}' to be rejected", key);
        }
    }
}
