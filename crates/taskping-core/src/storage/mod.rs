pub mod state;

pub use state::StateStorage;

use std::path::PathBuf;

pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .expect("Could not find data directory")
        .join("taskping")
}

/// Default location of the notified-state file
pub fn default_state_path() -> PathBuf {
    get_data_dir().join("notified_state.json")
}
