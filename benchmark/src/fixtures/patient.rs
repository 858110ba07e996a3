// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Typed model of a FHIR Patient resource, used by the struct suites.
//!
//! Every struct defaults missing fields and ignores unknown ones so that any
//! reasonably shaped object deserializes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Patient {
    pub resource_type: String,
    pub id: String,
    pub text: Text,
    pub identifier: Vec<Identifier>,
    pub active: bool,
    pub name: Vec<Name>,
    pub telecom: Vec<Telecom>,
    pub gender: String,
    pub birth_date: String,
    #[serde(rename = "_birthDate")]
    pub birth_date_ext: Extensions,
    pub deceased_boolean: bool,
    pub address: Vec<Address>,
    pub contact: Vec<Contact>,
    pub communication: Vec<Communication>,
    pub managing_organization: Reference,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Text {
    pub status: String,
    pub div: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Name {
    pub given: Vec<String>,
    pub family: String,
    #[serde(rename = "_family")]
    pub family_ext: Extensions,
    #[serde(rename = "use")]
    pub use_: String,
    pub period: Period,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub reference: String,
    pub display: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identifier {
    #[serde(rename = "use")]
    pub use_: String,
    #[serde(rename = "type")]
    pub kind: CodeableConcept,
    pub system: String,
    pub value: String,
    pub period: Period,
    pub assigner: Reference,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Period {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    pub tag: Vec<Coding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Coding {
    pub system: String,
    pub code: String,
}

/// Holder for FHIR primitive extensions (`_birthDate`, `_family`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Extensions {
    pub extension: Vec<Extension>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Extension {
    pub url: String,
    pub value_date_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(rename = "use")]
    pub use_: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub line: Vec<String>,
    pub city: String,
    pub district: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub period: Period,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Telecom {
    #[serde(rename = "use")]
    pub use_: String,
    pub system: String,
    pub value: String,
    pub rank: i64,
    pub period: Period,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub relationship: Vec<CodeableConcept>,
    pub name: Name,
    pub telecom: Vec<Telecom>,
    pub address: Address,
    pub gender: String,
    pub period: Period,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Communication {
    pub language: CodeableConcept,
    pub preferred: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_sample_deserializes() {
        let sample = include_str!("../../../data/patient.json");
        let patient: Patient = serde_json::from_str(sample).unwrap();

        assert_eq!(patient.resource_type, "Patient");
        assert!(patient.active);
        assert!(!patient.name.is_empty());
        assert_eq!(patient.name[0].use_, "official");
        assert!(!patient.identifier.is_empty());
        assert!(!patient.birth_date_ext.extension.is_empty());
        assert!(!patient.contact.is_empty());
    }

    #[test]
    fn test_renamed_fields_roundtrip() {
        let patient = Patient {
            resource_type: "Patient".to_string(),
            birth_date: "1974-12-25".to_string(),
            ..Patient::default()
        };
        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["resourceType"], "Patient");
        assert_eq!(json["birthDate"], "1974-12-25");
        assert!(json.get("_birthDate").is_some());
        assert!(json.get("managingOrganization").is_some());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let patient: Patient =
            serde_json::from_str(r#"{"resourceType":"Patient","extra":{"a":1}}"#).unwrap();
        assert_eq!(patient.resource_type, "Patient");
        assert!(patient.name.is_empty());
    }
}
