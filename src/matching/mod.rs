// Matching: exact set overlap and threshold-based fuzzy overlap.

pub mod matcher;
pub mod similarity;
