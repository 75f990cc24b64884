//! `spec-manager spec` command.

use crate::error::Result;
use crate::store::TaskStore;

/// Execute the `spec` command.
///
/// # Errors
///
/// Returns an error if the document does not exist or cannot be read.
pub fn run(store: &TaskStore<'_>, path: &str) -> Result<()> {
    let content = store.load_specification(path)?;
    print!("{content}");
    Ok(())
}
