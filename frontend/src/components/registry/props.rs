//! Properties for the `DebtorRegistryComponent`.

use yew::prelude::*;

/// Configuration passed from a parent component to the registry.
#[derive(Properties, PartialEq, Clone)]
pub struct DebtorRegistryProps {
    /// Local-storage key the record list is persisted under. Defaults to the
    /// store's canonical `"debtors"` key; overriding it lets two registries
    /// coexist on one origin without sharing data.
    #[prop_or_else(default_storage_key)]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    common::store::STORAGE_KEY.to_string()
}
