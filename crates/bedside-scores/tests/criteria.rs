mod common;

use bedside_core::models::input::InputValue;
use bedside_scores::criteria;
use bedside_scores::definition::{Band, CriteriaSpec, Criterion};
use bedside_scores::{Catalog, ScoreEngine};

use common::{checked, compute, criteria_method, definition, inputs};

#[test]
fn two_of_three_unit_criteria_resolve_to_middle_band() {
    let result = compute("centor", &checked(&["tonsillar_exudate", "fever"]));

    assert_eq!(result.value(), Some(2.0));
    let band = result.band.expect("band");
    assert_eq!((band.min, band.max), (2.0, 3.0));
}

#[test]
fn nothing_checked_resolves_to_lowest_band() {
    let result = compute("centor", &checked(&[]));

    assert_eq!(result.value(), Some(0.0));
    let band = result.band.expect("band");
    assert_eq!((band.min, band.max), (0.0, 1.0));
}

#[test]
fn base_offset_score_subtracts_flagged_findings() {
    let result = compute("aspects", &checked(&["caudate", "m2"]));

    assert_eq!(result.value(), Some(8.0));
    let band = result.band.expect("band");
    assert_eq!((band.min, band.max), (8.0, 10.0));
    assert_eq!(band.label, "Favourable");
}

#[test]
fn base_offset_with_nothing_flagged_is_the_ceiling() {
    assert_eq!(compute("aspects", &checked(&[])).value(), Some(10.0));
}

#[test]
fn derived_criterion_adds_raw_value_to_fixed_weights() {
    let def = definition(
        "age_weighted",
        criteria_method(
            0.0,
            vec![
                Criterion::derived("age", "Age (years)"),
                Criterion::fixed("minor", "Minor finding", 10.0),
                Criterion::fixed("major", "Major finding", 20.0),
                Criterion::fixed("other", "Other finding", 30.0),
            ],
        ),
        vec![
            Band::new(0.0, 85.0, "Low", "low"),
            Band::new(86.0, 105.0, "Intermediate", "intermediate"),
            Band::new(106.0, 400.0, "High", "high"),
        ],
    );
    let catalog = Catalog::from_definitions(vec![def]).unwrap();

    let result = ScoreEngine::new(&catalog)
        .compute(
            "age_weighted",
            &inputs(&[
                ("age", InputValue::Number(70.0)),
                ("minor", InputValue::Flag(true)),
                ("major", InputValue::Flag(true)),
            ]),
        )
        .unwrap();

    assert_eq!(result.value(), Some(100.0));
    let band = result.band.expect("band");
    assert_eq!((band.min, band.max), (86.0, 105.0));
}

#[test]
fn pneumonia_severity_index_counts_age_and_subtracts_for_female() {
    let result = compute(
        "psi",
        &inputs(&[
            ("age", InputValue::Number(72.0)),
            ("female", InputValue::Flag(true)),
            ("heart_failure", InputValue::Flag(true)),
            ("bun", InputValue::Flag(true)),
        ]),
    );

    // 72 − 10 + 10 + 20
    assert_eq!(result.value(), Some(92.0));
    assert_eq!(result.band.expect("band").label, "Class IV");
}

#[test]
fn missing_derived_value_contributes_nothing() {
    let result = compute("psi", &checked(&["nursing_home"]));
    assert_eq!(result.value(), Some(10.0));
}

#[test]
fn negative_weight_can_take_total_below_zero() {
    let result = compute("wells_dvt", &checked(&["alternative_diagnosis"]));

    assert_eq!(result.value(), Some(-2.0));
    assert_eq!(result.band.expect("band").label, "Low");
}

#[test]
fn half_point_weights_accumulate_exactly() {
    let result = compute(
        "wells_pe",
        &checked(&["heart_rate", "immobilization", "previous_vte", "hemoptysis"]),
    );

    assert_eq!(result.value(), Some(5.5));
    assert_eq!(result.band.expect("band").label, "Moderate");
}

#[test]
fn toggling_a_criterion_on_then_off_restores_the_total() {
    let spec = CriteriaSpec {
        base_offset: 0.0,
        criteria: vec![
            Criterion::fixed("a", "A", 1.5),
            Criterion::fixed("b", "B", -2.0),
            Criterion::fixed("c", "C", 0.1),
            Criterion::derived("d", "D"),
        ],
    };
    let mut state = inputs(&[
        ("a", InputValue::Flag(true)),
        ("d", InputValue::Number(0.7)),
    ]);
    let before = criteria::total(&spec, &state);

    for id in ["b", "c"] {
        state.insert(id.to_string(), InputValue::Flag(true));
        assert_ne!(criteria::total(&spec, &state), before);

        state.insert(id.to_string(), InputValue::Flag(false));
        assert_eq!(criteria::total(&spec, &state), before);

        state.insert(id.to_string(), InputValue::Flag(true));
        state.remove(id);
        assert_eq!(criteria::total(&spec, &state), before);
    }
}

#[test]
fn every_builtin_checklist_totals_base_plus_weights() {
    use bedside_scores::definition::{CriterionKind, Method};

    for def in common::builtin().definitions() {
        let Method::Criteria(spec) = &def.method else {
            continue;
        };
        let fixed: Vec<_> = spec
            .criteria
            .iter()
            .filter_map(|c| match c.kind {
                CriterionKind::Fixed { weight } => Some((c.id.as_str(), weight)),
                CriterionKind::Derived => None,
            })
            .collect();

        let all: Vec<&str> = fixed.iter().map(|(id, _)| *id).collect();
        let expected = fixed.iter().fold(spec.base_offset, |acc, (_, w)| acc + w);
        assert_eq!(
            criteria::total(spec, &checked(&all)),
            expected,
            "score {}",
            def.id
        );
        assert_eq!(criteria::total(spec, &checked(&[])), spec.base_offset);
    }
}
