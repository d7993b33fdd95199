//! Free-text prescription parser.
//!
//! Turns text such as `"Paracetamol 500mg twice daily for 7 days; Ibuprofen
//! 200mg once daily"` into structured entries. Parsing fails soft: when
//! nothing usable is found the caller's previous entries come back.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::entry::PrescriptionEntry;

static DOSAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+\s*(?:mg|g|ml|units?))").expect("valid dosage pattern"));

static FREQUENCY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:once|twice|thrice|[0-9]+\s*times?)\s*(?:daily|per\s*day|a\s*day)")
        .expect("valid frequency pattern")
});

static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:for\s*)?([0-9]+\s*(?:days?|weeks?|months?))").expect("valid duration pattern")
});

/// Parser for free-text prescriptions.
pub struct PrescriptionParser;

impl PrescriptionParser {
    /// Parses `text`, falling back to `previous` when it yields nothing.
    ///
    /// # Edge Cases
    /// - Blank text: returns `previous`
    /// - No line with two or more tokens: returns `previous`
    pub fn parse(text: &str, previous: &[PrescriptionEntry]) -> Vec<PrescriptionEntry> {
        match Self::try_parse(text) {
            Some(entries) => entries,
            None => {
                debug!(
                    blank = text.trim().is_empty(),
                    kept = previous.len(),
                    "Prescription text unusable, keeping previous entries"
                );
                previous.to_vec()
            }
        }
    }

    /// Parses `text` without a fallback; `None` when no entry was produced.
    pub fn try_parse(text: &str) -> Option<Vec<PrescriptionEntry>> {
        if text.trim().is_empty() {
            return None;
        }

        let entries: Vec<PrescriptionEntry> = Self::lines(text)
            .filter_map(Self::parse_line)
            .collect();

        debug!(entries = entries.len(), "Parsed prescription text");

        if entries.is_empty() {
            None
        } else {
            Some(entries)
        }
    }

    /// Parses one line. Needs at least two whitespace-separated tokens;
    /// the first token is the medication name.
    pub fn parse_line(line: &str) -> Option<PrescriptionEntry> {
        let line = line.trim();
        let mut tokens = line.split_whitespace();
        let medication = tokens.next()?;
        tokens.next()?;

        let dosage = DOSAGE
            .captures(line)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();
        let frequency = FREQUENCY
            .find(line)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let duration = DURATION
            .captures(line)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();

        Some(PrescriptionEntry::new(medication, dosage, frequency, duration))
    }

    fn lines(text: &str) -> impl Iterator<Item = &str> {
        text.split([';', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}
