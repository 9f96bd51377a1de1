use std::env;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dataset locations
// ---------------------------------------------------------------------------

/// Directory layout of an IAPS distribution.
///
/// All paths are explicit so callers (and tests) can point the reader at
/// fixture files instead of the conventional install location.
#[derive(Debug, Clone, PartialEq)]
pub struct IapsConfig {
    /// Root of the dataset distribution.
    pub dataset_dir: PathBuf,
    /// The tab-separated scoring table ("AllSubjects" tech-report file).
    pub scoring_file: PathBuf,
    /// Directory holding the picture files.
    pub images_dir: PathBuf,
}

impl IapsConfig {
    /// Conventional layout of the "IAPS 2008 1-20" distribution under `dataset_dir`.
    pub fn new(dataset_dir: impl Into<PathBuf>) -> Self {
        let dataset_dir = dataset_dir.into();
        let scoring_file = dataset_dir
            .join("IAPS Tech Report")
            .join("AllSubjects_1-20.txt");
        let images_dir = dataset_dir.join("IAPS 1-20 Images");
        IapsConfig {
            dataset_dir,
            scoring_file,
            images_dir,
        }
    }
}

impl Default for IapsConfig {
    /// `$HOME/data/IAPS 2008 1-20`, falling back to the current directory
    /// when `HOME` is unset.
    fn default() -> Self {
        let home = env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        IapsConfig::new(home.join("data").join("IAPS 2008 1-20"))
    }
}
