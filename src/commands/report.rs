//! `spec-manager report` command.

use crate::error::Result;
use crate::report::ProgressReport;
use crate::store::TaskStore;

/// Execute the `report` command.
///
/// # Errors
///
/// Returns an error if a status directory cannot be read.
pub fn run(store: &TaskStore<'_>) -> Result<()> {
    let report = ProgressReport::collect(store, store.context().clock.as_ref())?;
    println!("{}", report.render());
    Ok(())
}
