//! Dictionaries for text analysis.
//!
//! Curated word tables consulted before rule-based estimation.

pub mod outliers;
