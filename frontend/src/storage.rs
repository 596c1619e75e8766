//! Browser adapter for the persistence port.
//!
//! The whole record list lives under one local-storage key as a JSON array,
//! and every save replaces that value wholesale. Load is best-effort: a
//! missing key, unavailable storage, or a corrupt snapshot all yield an empty
//! list, with corruption reported to the console rather than the user.

use common::model::debtor::Debtor;
use common::store::PersistencePort;
use gloo_console::{error, warn};

pub struct LocalStoragePort {
    key: String,
}

impl LocalStoragePort {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PersistencePort for LocalStoragePort {
    fn load(&self) -> Vec<Debtor> {
        let Some(storage) = local_storage() else {
            return Vec::new();
        };
        match storage.get_item(&self.key) {
            Ok(Some(text)) => match serde_json::from_str(&text) {
                Ok(list) => list,
                Err(err) => {
                    warn!(format!(
                        "discarding corrupt snapshot under {:?}: {err}",
                        self.key
                    ));
                    Vec::new()
                }
            },
            _ => Vec::new(),
        }
    }

    fn save(&self, debtors: &[Debtor]) {
        let Some(storage) = local_storage() else {
            warn!("local storage is unavailable, changes will not survive a reload");
            return;
        };
        match serde_json::to_string(debtors) {
            Ok(text) => {
                if let Err(err) = storage.set_item(&self.key, &text) {
                    error!(format!("failed to persist {} records: {err:?}", debtors.len()));
                }
            }
            Err(err) => error!(format!("failed to serialize the record list: {err}")),
        }
    }
}
