//! Experience tier estimation from stated year counts

use crate::error::{JobFitError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry-Level")]
    Entry,
    #[serde(rename = "Mid-Level")]
    Mid,
    #[serde(rename = "Senior")]
    Senior,
}

impl ExperienceLevel {
    pub fn from_years(years: u64) -> Self {
        match years {
            y if y >= 5 => ExperienceLevel::Senior,
            y if y >= 2 => ExperienceLevel::Mid,
            _ => ExperienceLevel::Entry,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry-Level",
            ExperienceLevel::Mid => "Mid-Level",
            ExperienceLevel::Senior => "Senior",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Buckets text into an experience tier using the largest "N years"/"Nyr" mention.
pub struct ExperienceClassifier {
    years_regex: Regex,
}

impl ExperienceClassifier {
    pub fn new() -> Result<Self> {
        let years_regex = Regex::new(r"(?i)([0-9]+)\s*(?:year|yr)")
            .map_err(|e| JobFitError::AnalysisFailed(format!("Invalid years regex: {}", e)))?;

        Ok(Self { years_regex })
    }

    /// Largest year count mentioned in `text`, if any.
    pub fn max_years(&self, text: &str) -> Option<u64> {
        self.years_regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1))
            // Digit runs too long for u64 are still "many years"
            .map(|digits| digits.as_str().parse::<u64>().unwrap_or(u64::MAX))
            .max()
    }

    pub fn classify(&self, text: &str) -> ExperienceLevel {
        match self.max_years(text) {
            Some(years) => ExperienceLevel::from_years(years),
            None => ExperienceLevel::Entry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ExperienceClassifier {
        ExperienceClassifier::new().unwrap()
    }

    #[test]
    fn test_no_year_mentions_is_entry_level() {
        assert_eq!(classifier().classify(""), ExperienceLevel::Entry);
        assert_eq!(classifier().classify("Recent graduate, eager to learn"), ExperienceLevel::Entry);
    }

    #[test]
    fn test_thresholds() {
        let c = classifier();
        assert_eq!(c.classify("1 year of experience"), ExperienceLevel::Entry);
        assert_eq!(c.classify("2 years of experience"), ExperienceLevel::Mid);
        assert_eq!(c.classify("4 years of experience"), ExperienceLevel::Mid);
        assert_eq!(c.classify("5 years of experience"), ExperienceLevel::Senior);
        assert_eq!(c.classify("12 years of experience"), ExperienceLevel::Senior);
    }

    #[test]
    fn test_abbreviations_and_spacing() {
        let c = classifier();
        assert_eq!(c.max_years("3yr in retail"), Some(3));
        assert_eq!(c.max_years("3 YRS support"), Some(3));
        assert_eq!(c.max_years("7Years at Acme"), Some(7));
        assert_eq!(c.max_years("6 \t years"), Some(6));
    }

    #[test]
    fn test_uses_maximum_mention() {
        let text = "1 year at a startup, then 6 years at a bank, then 3 years consulting";
        assert_eq!(classifier().max_years(text), Some(6));
        assert_eq!(classifier().classify(text), ExperienceLevel::Senior);
    }

    #[test]
    fn test_numbers_without_year_unit_are_ignored() {
        assert_eq!(classifier().classify("Managed 40 engineers across 9 teams"), ExperienceLevel::Entry);
    }

    #[test]
    fn test_huge_numbers_saturate() {
        let text = "99999999999999999999999 years";
        assert_eq!(classifier().max_years(text), Some(u64::MAX));
        assert_eq!(classifier().classify(text), ExperienceLevel::Senior);
    }

    #[test]
    fn test_serialized_labels() {
        assert_eq!(serde_json::to_string(&ExperienceLevel::Mid).unwrap(), "\"Mid-Level\"");
        assert_eq!(ExperienceLevel::Entry.to_string(), "Entry-Level");
    }
}
