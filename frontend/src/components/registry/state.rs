//! Component state for the debtor registry.
//!
//! Holds the record store, the shared form-field state used by both the
//! create panel and the edit dialog, the single-row selection driving the
//! action menu and modal, and the table's presentation state (sorting,
//! pagination, checkbox selection).

use std::collections::HashSet;

use yew::prelude::*;

use common::model::debtor::{Debtor, DebtorFields, Status};
use common::store::RecordStore;

use crate::storage::LocalStoragePort;

/// Page sizes offered by the table footer. The first entry is the default.
pub const PAGE_SIZES: [usize; 2] = [20, 30];

/// Columns the table can be sorted on. Sorting is presentation only; the
/// store keeps insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Address,
    House,
    Apartament,
    Date,
    Sum,
    Telephone,
    Fio,
    Status,
    Payment,
    PaymentDate,
}

/// Main state container for the `DebtorRegistryComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct DebtorRegistryComponent {
    /// Authoritative record list, mirrored to storage on every mutation.
    pub store: RecordStore,

    // Shared form fields. The edit dialog deliberately binds to the same
    // state as the create panel, matching the single-form workflow.
    pub address: String,
    pub house: String,
    pub apartament: String,
    pub sum: String,
    pub telephone: String,
    pub fio: String,
    /// Label of the selected status option, `"Sealed"` or `"Served"`.
    pub status: String,
    pub payment: String,
    pub payment_date: String,

    /// Row the contextual action menu is currently anchored to, if open.
    pub menu_anchor: Option<i64>,

    /// The single record the menu and edit dialog operate on.
    pub selected_id: Option<i64>,

    // Table presentation state.
    pub page: usize,
    pub page_size: usize,
    pub sort: Option<(SortKey, bool)>,
    pub checked: HashSet<i64>,

    /// Reference to the edit dialog's modal sheet container.
    pub edit_sheet_ref: NodeRef,

    /// Reference to the hidden file input used for import.
    pub import_input_ref: NodeRef,
}

impl DebtorRegistryComponent {
    pub fn new(storage_key: &str) -> Self {
        Self {
            store: RecordStore::open(Box::new(LocalStoragePort::new(storage_key))),
            address: String::new(),
            house: String::new(),
            apartament: String::new(),
            sum: String::new(),
            telephone: String::new(),
            fio: String::new(),
            status: Status::SEALED_LABEL.to_string(),
            payment: String::new(),
            payment_date: String::new(),
            menu_anchor: None,
            selected_id: None,
            page: 0,
            page_size: PAGE_SIZES[0],
            sort: None,
            checked: HashSet::new(),
            edit_sheet_ref: NodeRef::default(),
            import_input_ref: NodeRef::default(),
        }
    }

    /// Builds the store payload from the current form fields.
    ///
    /// House and apartment numbers that do not parse map to zero, which the
    /// store rejects on create. Payment fields only travel when the selector
    /// shows `Served`.
    pub fn form_fields(&self) -> DebtorFields {
        let status = if self.status == Status::SERVED_LABEL {
            Status::Served {
                payment: self.payment.clone(),
                payment_date: self.payment_date.clone(),
            }
        } else {
            Status::Sealed
        };

        DebtorFields {
            address: self.address.clone(),
            house: self.house.trim().parse().unwrap_or(0),
            apartament: self.apartament.trim().parse().unwrap_or(0),
            sum: self.sum.clone(),
            telephone: self.telephone.clone(),
            fio: self.fio.clone(),
            status,
        }
    }

    /// Resets every form field to its default after a successful create.
    pub fn clear_form(&mut self) {
        self.address.clear();
        self.house.clear();
        self.apartament.clear();
        self.sum.clear();
        self.telephone.clear();
        self.fio.clear();
        self.status = Status::SEALED_LABEL.to_string();
        self.payment.clear();
        self.payment_date.clear();
    }

    /// Copies a stored record into the shared form state for editing.
    pub fn load_form(&mut self, debtor: &Debtor) {
        self.address = debtor.address.clone();
        self.house = debtor.house.to_string();
        self.apartament = debtor.apartament.to_string();
        self.sum = debtor.sum.clone();
        self.telephone = debtor.telephone.clone();
        self.fio = debtor.fio.clone();
        self.status = debtor.status.label().to_string();
        self.payment = debtor.status.payment().unwrap_or_default().to_string();
        self.payment_date = debtor.status.payment_date().unwrap_or_default().to_string();
    }
}
