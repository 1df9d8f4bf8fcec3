//! Core record types for the form registry - no dioxus imports needed here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage key the registry persists under. Matches the key the original
/// page wrote, so existing data is picked up on first load.
pub const STORAGE_KEY: &str = "items";

/// Version stamped into newly persisted payloads.
pub const SCHEMA_VERSION: u32 = 1;

/// The submitted payload of a form. The schema is fixed in this demo,
/// but nothing outside this struct depends on the exact field set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub surname: String,
    pub age: u32,
}

/// One submitted form. Records are immutable once created; there is no
/// update or delete operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    /// Lookup and routing key. Compared case-insensitively, stored
    /// as entered.
    pub form_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub fields: FormFields,
}

/// Persistence envelope with an explicit schema version, so a future
/// format change does not have to guess what it is reading.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct StoredRegistry {
    pub version: u32,
    pub items: Vec<FormRecord>,
}

/// A validated submission ready to be handed to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub form_name: String,
    pub description: String,
    pub fields: FormFields,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> FormRecord {
        FormRecord {
            form_name: "contact".to_string(),
            description: "basic".to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 4, 1, 12, 30, 0).unwrap(),
            fields: FormFields {
                name: "Ada".to_string(),
                surname: "Lovelace".to_string(),
                age: 30,
            },
        }
    }

    #[test]
    fn records_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["formName"], "contact");
        assert_eq!(json["description"], "basic");
        assert_eq!(json["fields"]["surname"], "Lovelace");
        assert_eq!(json["fields"]["age"], 30);
        // created_at goes out as an RFC 3339 string
        assert!(json["createdAt"].as_str().unwrap().starts_with("2023-04-01T12:30:00"));
    }

    #[test]
    fn records_parse_the_original_page_payload() {
        // Shape written by the original page: bare array, JS Date ISO string.
        let raw = r#"[{
            "formName": "contact",
            "description": "basic",
            "createdAt": "2023-04-01T12:30:00.000Z",
            "fields": { "name": "Ada", "surname": "Lovelace", "age": 30 }
        }]"#;

        let records: Vec<FormRecord> = serde_json::from_str(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].form_name, "contact");
        assert_eq!(records[0].fields.age, 30);
    }
}
