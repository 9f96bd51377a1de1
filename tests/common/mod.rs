use std::fs;

use iaps::{Iaps, IapsConfig};
use tempfile::TempDir;

/// Ten-picture scoring file in the shipped layout: seven preamble lines,
/// then eleven tab-separated fields per row, `.` for missing values, and a
/// backslash-terminated set field.
pub const SCORING_FIXTURE: &str = concat!(
    "International Affective Picture System\n",
    "All-subject ratings, sets 1-20\n",
    "Ratings collected on 9-point scales\n",
    "\n",
    "Means and standard deviations per picture\n",
    "\n",
    "desc\tIAPS\tvalmn\tvalsd\taromn\tarosd\tdom1mn\tdom1sd\tdom2mn\tdom2sd\tset\n",
    "Puppies\t1710\t8.34\t1.12\t5.41\t2.34\t6.68\t1.87\t6.21\t2.01\t1\\\n",
    "Cemetery\t9000\t2.55\t1.46\t4.06\t2.06\t3.89\t2.02\t.\t.\t1\\\n",
    "Mug\t7035\t4.98\t1.08\t2.66\t1.82\t5.68\t1.61\t5.39\t1.70\t2\\\n",
    "Basket\t7010\t4.94\t1.07\t1.76\t1.48\t5.52\t1.87\t.\t.\t3\\\n",
    "Attack\t6570.1\t2.19\t1.56\t6.24\t2.16\t2.95\t2.40\t.\t.\t20\\\n",
    "Garbage\t9290\t2.88\t1.52\t4.40\t2.10\t4.51\t1.89\t.\t.\t2\\\n",
    "Rollercoaster\t8490\t7.20\t2.35\t6.68\t1.97\t6.09\t2.31\t.\t.\t5\\\n",
    "Beach\t5833.0\t8.22\t1.34\t5.71\t2.46\t6.94\t1.91\t.\t.\t20\\\n",
    "Fork\t7080\t5.27\t1.09\t2.32\t1.84\t5.91\t1.87\t.\t.\t2\\\n",
    "Unscored\t2038\t.\t.\t3.00\t1.90\t.\t.\t.\t.\t4\\\n",
);

/// Write the fixture scoring file into a temp dir and return a dataset
/// handle pointed at it. The temp dir must stay alive for the handle to
/// keep working.
pub fn fixture_dataset() -> (TempDir, Iaps) {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = TempDir::new().expect("create temp dir");
    let mut config = IapsConfig::new(dir.path());
    config.scoring_file = dir.path().join("AllSubjects_1-20.txt");
    config.images_dir = dir.path().join("images");
    fs::write(&config.scoring_file, SCORING_FIXTURE).expect("write fixture");
    (dir, Iaps::new(config))
}
