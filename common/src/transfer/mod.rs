//! Import/export codec for the debtor list.
//!
//! Export is a pretty-printed JSON array; import accepts the same shape back.
//! The two failure modes are kept apart so the UI can tell the user whether
//! the file could not be parsed at all or parsed into something that is not a
//! list of records.

use serde_json::Value;
use thiserror::Error;

use crate::model::debtor::Debtor;

#[derive(Debug, Error)]
pub enum ImportError {
    /// The file content is not parseable JSON.
    #[error("could not read the file")]
    Unreadable(#[from] serde_json::Error),
    /// Valid JSON whose top level is not an array of records.
    #[error("invalid file format: expected a list of debtor records")]
    NotAList,
}

/// Parses uploaded file text into a replacement debtor list.
///
/// Elements are decoded tolerantly (missing fields default, unknown keys are
/// ignored), but a value that cannot be coerced into a record object at all
/// rejects the whole import, leaving the caller's list untouched.
pub fn parse_import(text: &str) -> Result<Vec<Debtor>, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(ImportError::NotAList);
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value::<Debtor>(item).map_err(|_| ImportError::NotAList))
        .collect()
}

/// Serializes the full list as pretty-printed JSON. Never mutates anything.
pub fn export_json(debtors: &[Debtor]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(debtors)
}

/// File name offered for a download started at `stamp` (an ISO-8601 instant).
pub fn export_file_name(stamp: &str) -> String {
    format!("debtors_{stamp}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::debtor::Status;

    #[test]
    fn export_then_import_round_trips() {
        let debtors = vec![
            Debtor {
                id: 1,
                address: "Main St".to_string(),
                house: 5,
                apartament: 12,
                date: "1/2/2024".to_string(),
                sum: "1.500".to_string(),
                telephone: "+7-912-345-67-89".to_string(),
                fio: "Ivanov I. I.".to_string(),
                status: Status::Sealed,
            },
            Debtor {
                id: 2,
                address: "Oak Ave".to_string(),
                house: 1,
                apartament: 3,
                status: Status::Served {
                    payment: "500".to_string(),
                    payment_date: "2024-01-01".to_string(),
                },
                ..Debtor::default()
            },
        ];

        let text = export_json(&debtors).unwrap();
        let back = parse_import(&text).unwrap();
        assert_eq!(back, debtors);
    }

    #[test]
    fn non_array_json_is_an_invalid_format() {
        let err = parse_import(r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, ImportError::NotAList));

        let err = parse_import(r#""just a string""#).unwrap_err();
        assert!(matches!(err, ImportError::NotAList));
    }

    #[test]
    fn unparseable_text_is_a_read_error() {
        let err = parse_import("not json at all {").unwrap_err();
        assert!(matches!(err, ImportError::Unreadable(_)));
    }

    #[test]
    fn loosely_shaped_objects_are_accepted_with_defaults() {
        let list = parse_import(r#"[{"address": "Elm St"}, {}]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].address, "Elm St");
        assert_eq!(list[0].status, Status::Sealed);
        assert_eq!(list[1].id, 0);
    }

    #[test]
    fn uncoercible_elements_reject_the_import() {
        let err = parse_import(r#"[{"address": "Elm St"}, 42]"#).unwrap_err();
        assert!(matches!(err, ImportError::NotAList));
    }

    #[test]
    fn export_file_name_embeds_the_stamp() {
        assert_eq!(
            export_file_name("2024-01-02T03:04:05.000Z"),
            "debtors_2024-01-02T03:04:05.000Z.json"
        );
    }

    #[test]
    fn empty_list_exports_as_an_empty_array() {
        let text = export_json(&[]).unwrap();
        assert_eq!(parse_import(&text).unwrap(), vec![]);
    }
}
