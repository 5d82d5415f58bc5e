use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::theme::PreferenceStore;

// local storage, holding raw strings
//
// values are written without json quoting so that a stored theme reads as plain
// "dark" or "light".  failures are reported to the console and otherwise treated as
// an empty store; private browsing modes commonly refuse storage outright
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

// LocalStorage::raw() throws when storage is disabled, so check first
fn storage_available() -> bool {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .is_some()
}

pub fn set_local_storage(key: &str, value: &str) {
    if !storage_available() {
        return;
    }

    if let Err(err) = LocalStorage::raw().set_item(key, value) {
        console_error!(format!("Failed to set local storage {key}: {err:?}"));
    }
}

pub fn get_local_storage(key: &str) -> Option<String> {
    if !storage_available() {
        return None;
    }

    match LocalStorage::raw().get_item(key) {
        Ok(value) => value,
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            None
        }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        get_local_storage(key)
    }

    fn save(&mut self, key: &str, value: &str) {
        set_local_storage(key, value)
    }
}
