//! End-to-end tests: upstream record JSON on disk → registry → Dublin Core JSON.

use std::fs;

use global_search_core::RecordFamily;
use global_search_serializers::{JsonFormat, SerializeError, SerializerRegistry};
use serde_json::{json, Value};
use tempfile::TempDir;

fn rdm_record() -> Value {
    json!({
        "id": "q5jr8-hny72",
        "metadata": {
            "titles": ["Measurements of alpine snow cover"],
            "creators": ["Doe, Jane"],
            "rights": [
                "Creative Commons Attribution 4.0 International",
                "https://creativecommons.org/licenses/by/4.0/legalcode",
                "info:eu-repo/semantics/openAccess"
            ],
            "types": [
                "info:eu-repo/semantic/other",
                "datacite/Dataset"
            ],
            "languages": ["eng"]
        }
    })
}

fn write_fixture(dir: &TempDir, name: &str, value: &Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

#[test]
fn test_rdm_record_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "record.json", &rdm_record());

    let record: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let registry = SerializerRegistry::probe(&RecordFamily::ALL, JsonFormat::new());
    let out = registry
        .get(RecordFamily::Rdm)
        .serialize_object(&record)
        .unwrap();

    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        json!({
            "titles": ["Measurements of alpine snow cover"],
            "creators": ["Doe, Jane"],
            "rights": [
                "Creative Commons Attribution 4.0 International",
                "Open Access"
            ],
            "types": ["Other", "Dataset"],
            "languages": ["eng"]
        })
    );
}

#[test]
fn test_lom_record_passes_through_unchanged() {
    let registry = SerializerRegistry::probe(&[RecordFamily::Lom], JsonFormat::new());
    let metadata = json!({
        "rights": ["CC BY 4.0", "https://creativecommons.org/licenses/by/4.0/"],
        "types": ["lom/LearningResourceType"]
    });
    let out = registry
        .get(RecordFamily::Lom)
        .serialize_object(&json!({ "metadata": metadata }))
        .unwrap();

    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["rights"], metadata["rights"]);
    assert_eq!(value["types"], metadata["types"]);
}

#[test]
fn test_record_list_is_wrapped() {
    let registry = SerializerRegistry::probe(&RecordFamily::ALL, JsonFormat::pretty());
    let records = vec![rdm_record(), json!({"metadata": {"titles": ["Second"]}})];

    let out = registry
        .get(RecordFamily::Rdm)
        .serialize_object_list(&records, Some(57))
        .unwrap();
    assert!(out.contains('\n'));

    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["hits"]["total"], 57);
    let hits = value["hits"]["hits"].as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["types"], json!(["Other", "Dataset"]));
    assert_eq!(hits[1], json!({"titles": ["Second"]}));
}

#[test]
fn test_uninstalled_family_is_reported() {
    let registry = SerializerRegistry::probe(&[RecordFamily::Rdm], JsonFormat::new());

    let adapter = registry.get(RecordFamily::Marc21);
    assert!(!adapter.is_available());

    let err = adapter.serialize_object_list(&[], None).unwrap_err();
    assert!(matches!(
        err,
        SerializeError::Unsupported {
            family: RecordFamily::Marc21
        }
    ));
    assert_eq!(err.to_string(), "no serializer available for marc21 records");
}
