mod common;

use bedside_scores::catalog::{CatalogDocument, CATALOG_VERSION};
use bedside_scores::definition::{Band, Criterion, Group, InputField, Method};
use bedside_scores::scores::builtin_definitions;
use bedside_scores::{formulas, Catalog, CatalogError, Modality};

use common::{criteria_method, definition};

fn simple_checklist(id: &str, bands: Vec<Band>) -> bedside_scores::ScoreDefinition {
    definition(
        id,
        criteria_method(0.0, vec![Criterion::fixed("a", "A", 1.0)]),
        bands,
    )
}

#[test]
fn builtin_catalog_validates() {
    let catalog = common::builtin();
    assert!(catalog.len() >= 40);
    assert!(!catalog.is_empty());
}

#[test]
fn builtin_catalog_covers_every_modality() {
    let catalog = common::builtin();
    for modality in [
        Modality::Criteria,
        Modality::Categorical,
        Modality::Formula,
        Modality::Informational,
    ] {
        assert!(
            catalog.definitions().any(|d| d.modality() == modality),
            "{modality:?}"
        );
    }
}

#[test]
fn every_registered_formula_has_a_definition() {
    let catalog = common::builtin();
    for id in formulas::ids() {
        let def = catalog
            .lookup(id)
            .unwrap_or_else(|| panic!("no definition for formula {id}"));
        assert_eq!(def.modality(), Modality::Formula);
    }
    for def in catalog.definitions().filter(|d| d.modality() == Modality::Formula) {
        assert!(formulas::lookup(&def.id).is_some(), "{}", def.id);
    }
}

#[test]
fn lookup_unknown_id_is_none() {
    assert!(common::builtin().lookup("not_a_score").is_none());
}

#[test]
fn definitions_keep_declaration_order() {
    let ids: Vec<_> = common::builtin().definitions().map(|d| d.id.clone()).collect();
    let declared: Vec<_> = builtin_definitions().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, declared);
}

#[test]
fn duplicate_score_ids_are_rejected() {
    let err = Catalog::from_definitions(vec![
        simple_checklist("dup", vec![]),
        simple_checklist("dup", vec![]),
    ])
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateScore(id) if id == "dup"));
}

#[test]
fn empty_id_is_rejected() {
    let err = Catalog::from_definitions(vec![simple_checklist("  ", vec![])]).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyId));
}

#[test]
fn overlapping_bands_are_rejected() {
    let err = Catalog::from_definitions(vec![simple_checklist(
        "overlap",
        vec![Band::new(0.0, 2.0, "A", ""), Band::new(2.0, 4.0, "B", "")],
    )])
    .unwrap_err();
    assert!(matches!(err, CatalogError::UnorderedBands { index: 1, .. }));
}

#[test]
fn descending_bands_are_rejected() {
    let err = Catalog::from_definitions(vec![simple_checklist(
        "descending",
        vec![Band::new(5.0, 9.0, "High", ""), Band::new(0.0, 4.0, "Low", "")],
    )])
    .unwrap_err();
    assert!(matches!(err, CatalogError::UnorderedBands { .. }));
}

#[test]
fn inverted_band_is_rejected() {
    let err = Catalog::from_definitions(vec![simple_checklist(
        "inverted",
        vec![Band::new(3.0, 1.0, "A", "")],
    )])
    .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidBand { index: 0, .. }));
}

#[test]
fn formula_without_implementation_is_rejected() {
    let err = Catalog::from_definitions(vec![definition(
        "homemade_index",
        Method::Formula {
            fields: vec![InputField::number("x", "X", "u")],
        },
        vec![],
    )])
    .unwrap_err();
    assert!(matches!(err, CatalogError::MissingFormula(id) if id == "homemade_index"));
}

#[test]
fn informational_score_with_bands_is_rejected() {
    let err = Catalog::from_definitions(vec![definition(
        "narrative",
        Method::Informational {
            text: "text".to_string(),
        },
        vec![Band::new(0.0, 1.0, "A", "")],
    )])
    .unwrap_err();
    assert!(matches!(err, CatalogError::BandsOnInformational(_)));
}

#[test]
fn empty_group_and_duplicate_entries_are_rejected() {
    let err = Catalog::from_definitions(vec![definition(
        "grouped",
        Method::Categorical {
            groups: vec![Group::new("g", "G", &[])],
        },
        vec![],
    )])
    .unwrap_err();
    assert!(matches!(err, CatalogError::EmptyGroup { .. }));

    let err = Catalog::from_definitions(vec![definition(
        "twice",
        criteria_method(
            0.0,
            vec![Criterion::fixed("a", "A", 1.0), Criterion::fixed("a", "A again", 2.0)],
        ),
        vec![],
    )])
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateEntry { entry_id, .. } if entry_id == "a"));
}

#[test]
fn json_document_loads_and_validates() {
    let json = r#"{
        "catalog_version": 1,
        "definitions": [{
            "id": "mini",
            "name": "Mini Score",
            "description": "Two-item checklist.",
            "source": "Local protocol.",
            "method": {
                "modality": "criteria",
                "payload": {
                    "base_offset": 10,
                    "criteria": [
                        { "id": "a", "label": "A", "kind": { "type": "fixed", "weight": -1 } },
                        { "id": "age", "label": "Age", "kind": { "type": "derived" } }
                    ]
                }
            },
            "bands": [
                { "min": 0, "max": 10, "label": "Low", "risk": "low" }
            ],
            "unit": null
        }]
    }"#;

    let catalog = Catalog::from_json_str(json).unwrap();
    let mini = catalog.lookup("mini").unwrap();
    assert_eq!(mini.modality(), Modality::Criteria);
    assert!(mini.editorial.is_none());
}

#[test]
fn missing_version_reads_as_current() {
    let catalog = Catalog::from_json_str(r#"{"definitions": []}"#).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn newer_catalog_version_is_rejected() {
    let err = Catalog::from_json_str(r#"{"catalog_version": 99, "definitions": []}"#).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnsupportedVersion { found: 99, supported } if supported == CATALOG_VERSION
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Catalog::from_json_str("{ definitions: ").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn builtin_definitions_survive_a_json_resource() {
    let document = CatalogDocument {
        catalog_version: CATALOG_VERSION,
        definitions: builtin_definitions(),
    };
    let json = serde_json::to_string(&document).unwrap();

    let reloaded = Catalog::from_json_str(&json).unwrap();
    assert_eq!(reloaded.len(), common::builtin().len());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Catalog::from_path("/nonexistent/bedside/catalog.json").unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
