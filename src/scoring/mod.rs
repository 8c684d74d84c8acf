// Scoring: turns match sets into the published percentage.

pub mod score;
