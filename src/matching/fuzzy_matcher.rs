//! Fuzzy matching implementation for contact search.
//!
//! This module provides contact matching with:
//! - Exact and partial matching on phone numbers
//! - Fuzzy name matching (substring and edit distance)
//! - Confidence scoring (0-100 scale)

use crate::models::{AddressBook, Record};

/// Score reserved for an exact phone match.
const EXACT_PHONE_SCORE: u8 = 100;

/// Score for a query that is a digit run inside a stored phone.
const PARTIAL_PHONE_SCORE: u8 = 70;

/// Shortest digit query treated as a partial phone lookup.
const MIN_PARTIAL_PHONE_DIGITS: usize = 3;

/// A match result containing a contact and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// Name of the matched contact
    pub name: &'a str,

    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Query equals one of the contact's phones
    ExactPhone,

    /// Query is a digit run inside one of the contact's phones
    PartialPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find contacts in `book` matching a free-text query.
    ///
    /// # Arguments
    /// * `query` - A name fragment or a phone number fragment
    /// * `book` - Address book to search
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold for name matches (0-100)
    ///
    /// # Returns
    /// Matches sorted by confidence (highest first), then by name.
    pub fn find_matches<'a>(
        &self,
        query: &str,
        book: &'a AddressBook,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for (name, record) in book.iter() {
            // Phone matches take priority over name matches
            if let Some((confidence, match_type)) = self.match_phone(query, record) {
                results.push(MatchResult {
                    name,
                    record,
                    confidence,
                    match_type,
                });
                continue;
            }

            if let Some(confidence) = self.fuzzy_match_name(query, name) {
                if confidence >= min_confidence {
                    results.push(MatchResult {
                        name,
                        record,
                        confidence,
                        match_type: MatchType::FuzzyName,
                    });
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        results.truncate(max_results);

        results
    }

    /// Match a digit query against the record's phones.
    fn match_phone(&self, query: &str, record: &Record) -> Option<(u8, MatchType)> {
        if !query.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        if record.phones().iter().any(|p| p.as_str() == query) {
            return Some((EXACT_PHONE_SCORE, MatchType::ExactPhone));
        }

        if query.len() >= MIN_PARTIAL_PHONE_DIGITS
            && record.phones().iter().any(|p| p.as_str().contains(query))
        {
            return Some((PARTIAL_PHONE_SCORE, MatchType::PartialPhone));
        }

        None
    }

    /// Fuzzy match names.
    ///
    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, contact_name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(contact_name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using substring matching and Levenshtein distance.
    ///
    /// Returns a confidence score from 0-95 (100 is reserved for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8; // 10-95 range for contains matches
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();
        let len1 = s1_chars.len();
        let len2 = s2_chars.len();

        if len1 == 0 {
            return len2;
        }
        if len2 == 0 {
            return len1;
        }

        let mut matrix: Vec<Vec<usize>> = vec![vec![0; len2 + 1]; len1 + 1];

        for (i, row) in matrix.iter_mut().enumerate() {
            row[0] = i;
        }
        for (j, cell) in matrix[0].iter_mut().enumerate() {
            *cell = j;
        }

        for (i, c1) in s1_chars.iter().enumerate() {
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                matrix[i + 1][j + 1] = (matrix[i][j + 1] + 1)
                    .min(matrix[i + 1][j] + 1)
                    .min(matrix[i][j] + cost);
            }
        }

        matrix[len1][len2]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
