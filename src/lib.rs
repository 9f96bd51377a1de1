//! Interface to IAPS data.
//!
//! Utilities for reading scoring data and picture files from the
//! International Affective Picture System (IAPS), a fixed picture dataset
//! rated for affective valence, arousal and dominance.
//!
//! The scoring file is a tab-separated table read fresh on every call;
//! [`Iaps`] wraps the configured dataset location and offers samplers over
//! the valence column:
//!
//! ```no_run
//! use iaps::{Iaps, IapsConfig};
//!
//! # fn main() -> iaps::Result<()> {
//! let dataset = Iaps::new(IapsConfig::new("/data/IAPS 2008 1-20"));
//!
//! // Ten pleasant pictures, reproducible across runs.
//! let filenames = dataset.sample_positive_images(Some(10), Some(42))?;
//! assert_eq!(filenames.len(), 10);
//!
//! // Every picture the scoring table rates as neutral.
//! let all_neutral = dataset.sample_neutral_images(None, None)?;
//! # let _ = all_neutral;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod dataset;
pub mod error;
pub mod images;

pub use config::IapsConfig;
pub use data::filter::{
    ValenceBand, NEGATIVE_VALENCE_THRESHOLD, NEUTRAL_VALENCE_BAND, POSITIVE_VALENCE_THRESHOLD,
};
pub use data::loader::read_scoring;
pub use data::model::{ScoringRow, ScoringTable};
pub use dataset::Iaps;
pub use error::{IapsError, Result};
pub use images::full_filename;
