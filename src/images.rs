use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Identifier → picture file
// ---------------------------------------------------------------------------

/// Pictures whose files ship with an uppercase `.JPG` extension. The casing
/// is inconsistent in the dataset itself and must be matched, not fixed.
const UPPERCASE_EXTENSION_IDS: [&str; 4] = ["6570", "6570.1", "6561", "6560"];

/// Build the full path of a picture file from its identifier.
///
/// Pure path construction; the file is not checked for existence.
pub fn full_filename(images_dir: &Path, identifier: &str) -> PathBuf {
    let extension = if UPPERCASE_EXTENSION_IDS.contains(&identifier) {
        "JPG"
    } else {
        "jpg"
    };
    images_dir.join(format!("{identifier}.{extension}"))
}
