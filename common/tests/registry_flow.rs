//! End-to-end registry scenarios over the in-memory persistence port,
//! exercising the same create/edit/export path the UI drives.

use common::format::{format_amount, format_telephone};
use common::model::debtor::{DebtorFields, Status};
use common::store::{MemoryPort, Moment, RecordStore};
use common::transfer::{self, ImportError};

fn moment(millis: i64) -> Moment {
    Moment {
        epoch_millis: millis,
        local_text: "1/2/2024, 10:00:00 AM".to_string(),
    }
}

#[test]
fn create_edit_and_serve_a_debtor() {
    let port = MemoryPort::new();
    let mut store = RecordStore::open(Box::new(port.clone()));

    // What the create form submits after live formatting of "1500".
    let created = store.add(
        DebtorFields {
            address: "Main St".to_string(),
            house: 5,
            apartament: 12,
            sum: format_amount("1500"),
            telephone: format_telephone("9123456789"),
            fio: "Ivanov I. I.".to_string(),
            status: Status::Sealed,
        },
        moment(1_700_000_000_000),
    );
    assert!(created);

    let id = store.all()[0].id;
    let date = store.all()[0].date.clone();
    assert_eq!(store.all()[0].sum, "1.500");
    assert_eq!(store.all()[0].telephone, "+7-912-345-67-89");

    // The edit dialog resubmits the same field set with a served status.
    let saved = store.update(
        id,
        DebtorFields {
            address: "Main St".to_string(),
            house: 5,
            apartament: 12,
            sum: "1.500".to_string(),
            telephone: "+7-912-345-67-89".to_string(),
            fio: "Ivanov I. I.".to_string(),
            status: Status::Served {
                payment: format_amount("500"),
                payment_date: "2024-01-01".to_string(),
            },
        },
    );
    assert!(saved);

    let debtor = store.get(id).expect("record still present");
    assert_eq!(debtor.status.label(), "Served");
    assert_eq!(debtor.status.payment(), Some("500"));
    assert_eq!(debtor.status.payment_date(), Some("2024-01-01"));
    assert_eq!(debtor.address, "Main St");
    assert_eq!(debtor.house, 5);
    assert_eq!(debtor.apartament, 12);
    assert_eq!(debtor.id, id);
    assert_eq!(debtor.date, date);

    // The persisted snapshot reflects the edit.
    let reopened = RecordStore::open(Box::new(port));
    assert_eq!(reopened.all(), store.all());
}

#[test]
fn export_import_round_trip_replaces_the_list() {
    let mut store = RecordStore::open(Box::new(MemoryPort::new()));
    for (i, street) in ["Main St", "Oak Ave", "Elm St"].iter().enumerate() {
        let mut fields = DebtorFields {
            address: street.to_string(),
            house: i as u32 + 1,
            apartament: 10 + i as u32,
            ..DebtorFields::default()
        };
        if i == 1 {
            fields.status = Status::Served {
                payment: "1.000".to_string(),
                payment_date: "2024-02-02".to_string(),
            };
        }
        assert!(store.add(fields, moment(i as i64)));
    }

    let exported = transfer::export_json(store.all()).unwrap();
    let original = store.all().to_vec();

    // Importing into a fresh store yields a deep-equal list.
    let mut other = RecordStore::open(Box::new(MemoryPort::new()));
    other.replace_all(transfer::parse_import(&exported).unwrap());
    assert_eq!(other.all(), &original[..]);
}

#[test]
fn failed_import_leaves_the_store_untouched() {
    let port = MemoryPort::new();
    let mut store = RecordStore::open(Box::new(port.clone()));
    assert!(store.add(
        DebtorFields {
            address: "Main St".to_string(),
            house: 5,
            apartament: 12,
            ..DebtorFields::default()
        },
        moment(42),
    ));
    let before = store.all().to_vec();
    let snapshot_before = port.snapshot();

    // The UI only calls replace_all after a successful parse.
    assert!(matches!(
        transfer::parse_import(r#"{"a": 1}"#),
        Err(ImportError::NotAList)
    ));
    assert!(matches!(
        transfer::parse_import("garbage {"),
        Err(ImportError::Unreadable(_))
    ));

    assert_eq!(store.all(), &before[..]);
    assert_eq!(port.snapshot(), snapshot_before);
}
