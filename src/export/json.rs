//! JSON snapshots of a card's learning state.
//! Lets the `sm2` command keep one card's progress in a file between runs.

use crate::error::StateFileError;
use crate::models::LearningState;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

pub type Result<T> = std::result::Result<T, StateFileError>;

/// Writes the state to `path` as pretty-printed JSON, replacing any existing file.
pub fn export_state_to_path(state: &LearningState, path: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(state)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    log::debug!("learning state written to '{}'", path.display());
    Ok(())
}

/// Reads a state previously written by [`export_state_to_path`].
pub fn import_state(path: &Path) -> Result<LearningState> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let state: LearningState = serde_json::from_str(&contents)?;

    log::debug!(
        "learning state loaded from '{}' (repetitions={}, interval={})",
        path.display(),
        state.repetitions,
        state.interval
    );
    Ok(state)
}

/// Like [`import_state`], but a missing file means a card that has never been reviewed.
pub fn load_or_default(path: &Path) -> Result<LearningState> {
    match import_state(path) {
        Err(StateFileError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            log::info!("no state at '{}', starting a new card", path.display());
            Ok(LearningState::default())
        }
        other => other,
    }
}
