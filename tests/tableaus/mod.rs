//! # Tableau files
//!
//! Small problems in the plain text format, each with a known outcome.
use std::path::{Path, PathBuf};

use relp_num::RationalBig;

use exact_tableau::data::tableau::Tableau;
use exact_tableau::io::import;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Folder where the tableau files are stored.
fn problem_file_directory() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("tableaus")
}

/// Read a tableau file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
fn read(name: &str) -> Tableau<RationalBig> {
    let path = problem_file_directory().join(name).with_extension("txt");
    import(&path).unwrap()
}
