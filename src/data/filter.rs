use super::model::ScoringTable;

// ---------------------------------------------------------------------------
// Valence bands
// ---------------------------------------------------------------------------

/// Default upper bound on mean valence for "negative" pictures.
pub const NEGATIVE_VALENCE_THRESHOLD: f64 = 3.0;

/// Default lower bound on mean valence for "positive" pictures.
pub const POSITIVE_VALENCE_THRESHOLD: f64 = 7.0;

/// Default inclusive band for "neutral" pictures.
pub const NEUTRAL_VALENCE_BAND: (f64, f64) = (4.0, 6.0);

/// Predicate on a picture's mean valence. All comparisons are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValenceBand {
    /// Mean valence at or below the bound.
    AtMost(f64),
    /// Mean valence at or above the bound.
    AtLeast(f64),
    /// Mean valence inside the inclusive range.
    Between(f64, f64),
}

impl ValenceBand {
    /// Band for negative pictures at the conventional threshold.
    pub fn negative() -> Self {
        ValenceBand::AtMost(NEGATIVE_VALENCE_THRESHOLD)
    }

    /// Band for positive pictures at the conventional threshold.
    pub fn positive() -> Self {
        ValenceBand::AtLeast(POSITIVE_VALENCE_THRESHOLD)
    }

    /// Band for neutral pictures at the conventional thresholds.
    pub fn neutral() -> Self {
        let (lo, hi) = NEUTRAL_VALENCE_BAND;
        ValenceBand::Between(lo, hi)
    }

    /// Whether a mean valence falls in the band.
    pub fn matches(&self, valence_mean: f64) -> bool {
        match *self {
            ValenceBand::AtMost(max) => valence_mean <= max,
            ValenceBand::AtLeast(min) => valence_mean >= min,
            ValenceBand::Between(lo, hi) => lo <= valence_mean && valence_mean <= hi,
        }
    }
}

/// Return indices of rows whose mean valence falls in the band, in table
/// order. Rows without a valence score never match.
pub fn matching_indices(table: &ScoringTable, band: ValenceBand) -> Vec<usize> {
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.valence_mean.is_some_and(|v| band.matches(v)))
        .map(|(i, _)| i)
        .collect()
}
