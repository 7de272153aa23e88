//! Fuzzy matching utilities for contact search.
//!
//! This module provides fuzzy and exact matching for contacts based on
//! names and phone numbers.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{ContactMatcher, MatchResult, MatchType};
