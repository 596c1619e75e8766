//! The debtor record and its delivery status.
//!
//! `Debtor` is the only persisted entity. Records are serialized as flat JSON
//! objects, so files written by earlier versions of the register (status as a
//! plain string next to optional `payment`/`payment_date` keys) keep loading:
//! the status variant is internally tagged on the `status` key and decoding is
//! tolerant of missing or unknown fields.

use serde::{Deserialize, Deserializer, Serialize};

/// Delivery status of the notice for one debtor.
///
/// Payment details only exist while the notice has been served. Reverting a
/// record to `Sealed` therefore drops them, and sealed records never carry
/// stale payment keys in the persisted snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum Status {
    Sealed,
    Served {
        payment: String,
        payment_date: String,
    },
}

impl Status {
    pub const SEALED_LABEL: &'static str = "Sealed";
    pub const SERVED_LABEL: &'static str = "Served";

    pub fn label(&self) -> &'static str {
        match self {
            Status::Sealed => Self::SEALED_LABEL,
            Status::Served { .. } => Self::SERVED_LABEL,
        }
    }

    pub fn is_served(&self) -> bool {
        matches!(self, Status::Served { .. })
    }

    pub fn payment(&self) -> Option<&str> {
        match self {
            Status::Sealed => None,
            Status::Served { payment, .. } => Some(payment),
        }
    }

    pub fn payment_date(&self) -> Option<&str> {
        match self {
            Status::Sealed => None,
            Status::Served { payment_date, .. } => Some(payment_date),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Sealed
    }
}

/// Loose wire shape used while decoding. Anything that is not literally
/// `"Served"` collapses to `Sealed`, and payment keys on sealed records are
/// discarded.
#[derive(Default, Deserialize)]
#[serde(default)]
struct StatusWire {
    status: String,
    payment: String,
    payment_date: String,
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = StatusWire::deserialize(deserializer)?;
        Ok(match wire.status.as_str() {
            Status::SERVED_LABEL => Status::Served {
                payment: wire.payment,
                payment_date: wire.payment_date,
            },
            _ => Status::Sealed,
        })
    }
}

/// One tracked unit of debt, keyed by a unique `id`.
///
/// `id` and `date` are assigned once at creation and never change afterwards.
/// `sum` and `telephone` hold the formatted text produced by
/// [`crate::format`], not numeric values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Debtor {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub house: u32,
    #[serde(default)]
    pub apartament: u32,
    /// Human-readable creation timestamp, immutable after creation.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub sum: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub fio: String,
    #[serde(flatten)]
    pub status: Status,
}

impl Debtor {
    /// Overwrites every mutable field from a submitted form, leaving `id` and
    /// `date` untouched.
    pub fn apply(&mut self, fields: DebtorFields) {
        self.address = fields.address;
        self.house = fields.house;
        self.apartament = fields.apartament;
        self.sum = fields.sum;
        self.telephone = fields.telephone;
        self.fio = fields.fio;
        self.status = fields.status;
    }
}

/// The field set shared by the create form and the edit dialog.
///
/// `house` and `apartament` arrive already parsed; the form layer maps
/// unparseable input to zero, which the store rejects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DebtorFields {
    pub address: String,
    pub house: u32,
    pub apartament: u32,
    pub sum: String,
    pub telephone: String,
    pub fio: String,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn served_record_serializes_flat() {
        let debtor = Debtor {
            id: 7,
            address: "Main St".to_string(),
            house: 5,
            apartament: 12,
            date: "1/2/2024".to_string(),
            sum: "1.500".to_string(),
            telephone: "+7-912-345-67-89".to_string(),
            fio: "Ivanov I. I.".to_string(),
            status: Status::Served {
                payment: "500".to_string(),
                payment_date: "2024-01-01".to_string(),
            },
        };

        let value = serde_json::to_value(&debtor).unwrap();
        assert_eq!(value["status"], "Served");
        assert_eq!(value["payment"], "500");
        assert_eq!(value["payment_date"], "2024-01-01");
        assert_eq!(value["address"], "Main St");
    }

    #[test]
    fn sealed_record_carries_no_payment_keys() {
        let debtor = Debtor {
            id: 1,
            status: Status::Sealed,
            ..Debtor::default()
        };

        let value = serde_json::to_value(&debtor).unwrap();
        assert_eq!(value["status"], "Sealed");
        assert!(value.get("payment").is_none());
        assert!(value.get("payment_date").is_none());
    }

    #[test]
    fn legacy_sealed_record_drops_stray_payment_keys() {
        let text = r#"{
            "id": 3,
            "address": "Oak Ave",
            "house": 2,
            "apartament": 9,
            "date": "x",
            "sum": "100",
            "telephone": "+7",
            "fio": "",
            "status": "Sealed",
            "payment": "999",
            "payment_date": "yesterday"
        }"#;

        let debtor: Debtor = serde_json::from_str(text).unwrap();
        assert_eq!(debtor.status, Status::Sealed);
        assert_eq!(debtor.status.payment(), None);
    }

    #[test]
    fn missing_status_defaults_to_sealed() {
        let debtor: Debtor = serde_json::from_str(r#"{"id": 4, "address": "Elm St"}"#).unwrap();
        assert_eq!(debtor.status, Status::Sealed);
        assert_eq!(debtor.address, "Elm St");
        assert_eq!(debtor.house, 0);
    }

    #[test]
    fn round_trip_preserves_served_payment() {
        let debtor = Debtor {
            id: 99,
            status: Status::Served {
                payment: "1.000".to_string(),
                payment_date: "soon".to_string(),
            },
            ..Debtor::default()
        };

        let text = serde_json::to_string(&debtor).unwrap();
        let back: Debtor = serde_json::from_str(&text).unwrap();
        assert_eq!(back, debtor);
    }

    #[test]
    fn apply_preserves_id_and_date() {
        let mut debtor = Debtor {
            id: 42,
            date: "1/1/2024".to_string(),
            address: "Old St".to_string(),
            ..Debtor::default()
        };

        debtor.apply(DebtorFields {
            address: "New St".to_string(),
            house: 3,
            apartament: 8,
            sum: "2.000".to_string(),
            telephone: "+7-900-000-00-00".to_string(),
            fio: "Petrov P. P.".to_string(),
            status: Status::Sealed,
        });

        assert_eq!(debtor.id, 42);
        assert_eq!(debtor.date, "1/1/2024");
        assert_eq!(debtor.address, "New St");
        assert_eq!(debtor.house, 3);
    }
}
