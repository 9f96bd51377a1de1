// ---------------------------------------------------------------------------
// ScoringRow – one data line of the scoring file
// ---------------------------------------------------------------------------

/// Ratings for a single picture (one data line of the scoring file).
///
/// Statistic fields are `None` where the source carries the `.`
/// missing-value marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRow {
    /// Free-text label for the picture ("Puppies", "Mug", ...).
    pub description: String,
    /// Canonical picture key, also the image filename stem. Whole-valued
    /// keys render without a decimal point (`9941`), variant keys with
    /// exactly one decimal digit (`6570.1`).
    pub identifier: String,
    pub valence_mean: Option<f64>,
    pub valence_sd: Option<f64>,
    pub arousal_mean: Option<f64>,
    pub arousal_sd: Option<f64>,
    pub dominance1_mean: Option<f64>,
    pub dominance1_sd: Option<f64>,
    pub dominance2_mean: Option<f64>,
    pub dominance2_sd: Option<f64>,
    /// Subset/session the picture belongs to. The raw field carries a stray
    /// terminator that the loader strips before conversion.
    pub set_number: Option<u32>,
}

// ---------------------------------------------------------------------------
// ScoringTable – the complete parsed scoring file
// ---------------------------------------------------------------------------

/// All rows of the scoring file, in file order.
///
/// Built fresh on every read and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ScoringTable {
    /// All rows, in file order.
    pub rows: Vec<ScoringRow>,
}

impl ScoringTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row with the highest mean valence, if any row has one.
    pub fn max_valence_row(&self) -> Option<&ScoringRow> {
        self.rows
            .iter()
            .filter_map(|row| row.valence_mean.map(|v| (v, row)))
            .max_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, row)| row)
    }
}
