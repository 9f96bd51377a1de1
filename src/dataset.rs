use std::path::PathBuf;

use log::debug;

use crate::config::IapsConfig;
use crate::data::filter::{matching_indices, ValenceBand};
use crate::data::loader;
use crate::data::model::ScoringTable;
use crate::data::sample::sample_without_replacement;
use crate::error::Result;
use crate::images;

// ---------------------------------------------------------------------------
// Dataset handle
// ---------------------------------------------------------------------------

/// Handle to an IAPS distribution on disk.
///
/// Holds only configuration; the scoring file is re-read on every call, so
/// there is no cache to invalidate and calls never observe each other.
#[derive(Debug, Clone, Default)]
pub struct Iaps {
    config: IapsConfig,
}

impl Iaps {
    pub fn new(config: IapsConfig) -> Self {
        Iaps { config }
    }

    pub fn config(&self) -> &IapsConfig {
        &self.config
    }

    /// Read and parse the scoring table from the configured location.
    pub fn read_scoring(&self) -> Result<ScoringTable> {
        loader::read_scoring(&self.config.scoring_file)
    }

    /// Full path of the picture file for an identifier.
    pub fn full_filename(&self, identifier: &str) -> PathBuf {
        images::full_filename(&self.config.images_dir, identifier)
    }

    /// Sample picture files whose mean valence falls in `band`.
    ///
    /// Reads the scoring table fresh, selects the matching rows, draws `n`
    /// of them without replacement (all of them when `n` is `None`) and
    /// resolves each identifier to its file path, in draw order.
    pub fn sample_images(
        &self,
        band: ValenceBand,
        n: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Vec<PathBuf>> {
        let table = self.read_scoring()?;
        let selected = matching_indices(&table, band);
        debug!("{} of {} rows match {band:?}", selected.len(), table.len());

        let drawn = sample_without_replacement(&selected, n, seed)?;
        Ok(drawn
            .into_iter()
            .map(|i| self.full_filename(&table.rows[i].identifier))
            .collect())
    }

    /// Sample pictures rated negative (mean valence at or below 3.0).
    pub fn sample_negative_images(
        &self,
        n: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Vec<PathBuf>> {
        self.sample_images(ValenceBand::negative(), n, seed)
    }

    /// Sample pictures rated positive (mean valence at or above 7.0).
    pub fn sample_positive_images(
        &self,
        n: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Vec<PathBuf>> {
        self.sample_images(ValenceBand::positive(), n, seed)
    }

    /// Sample pictures rated neutral (mean valence between 4.0 and 6.0).
    pub fn sample_neutral_images(
        &self,
        n: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Vec<PathBuf>> {
        self.sample_images(ValenceBand::neutral(), n, seed)
    }
}
