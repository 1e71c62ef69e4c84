use super::{bands, checklist, define, Header};
use crate::definition::{CriteriaSpec, Criterion, Method, ScoreDefinition};

pub(super) fn definitions() -> Vec<ScoreDefinition> {
    vec![curb65(), pneumonia_severity_index()]
}

fn curb65() -> ScoreDefinition {
    define(
        Header {
            id: "curb65",
            name: "CURB-65",
            description: "Severity of community-acquired pneumonia and site-of-care decision.",
            source: "Lim WS, et al. Thorax. 2003;58(5):377-382.",
        },
        checklist(
            0.0,
            &[
                ("confusion", "Confusion", 1.0),
                ("urea", "Urea >7 mmol/L (BUN >19 mg/dL)", 1.0),
                ("respiratory_rate", "Respiratory rate ≥30/min", 1.0),
                ("blood_pressure", "SBP <90 mmHg or DBP ≤60 mmHg", 1.0),
                ("age_65", "Age ≥65 years", 1.0),
            ],
        ),
        bands(&[
            (0.0, 1.0, "Low", "30-day mortality about 1.5%; consider outpatient treatment."),
            (2.0, 2.0, "Moderate", "Mortality about 9%; short admission or supervised outpatient care."),
            (3.0, 5.0, "High", "Mortality about 22%; admit, consider ICU at 4–5."),
        ]),
        None,
    )
}

/// PORT/PSI. Age counts one point per year; female sex subtracts 10.
fn pneumonia_severity_index() -> ScoreDefinition {
    let mut criteria = vec![
        Criterion::derived("age", "Age (years)"),
        Criterion::fixed("female", "Female", -10.0),
    ];
    criteria.extend(
        [
            ("nursing_home", "Nursing home resident", 10.0),
            ("neoplastic_disease", "Neoplastic disease", 30.0),
            ("liver_disease", "Liver disease", 20.0),
            ("heart_failure", "Congestive heart failure", 10.0),
            ("cerebrovascular_disease", "Cerebrovascular disease", 10.0),
            ("renal_disease", "Renal disease", 10.0),
            ("altered_mental_status", "Altered mental status", 20.0),
            ("respiratory_rate", "Respiratory rate ≥30/min", 20.0),
            ("systolic_bp", "Systolic blood pressure <90 mmHg", 20.0),
            ("temperature", "Temperature <35 °C or ≥40 °C", 15.0),
            ("pulse", "Pulse ≥125/min", 10.0),
            ("arterial_ph", "Arterial pH <7.35", 30.0),
            ("bun", "BUN ≥30 mg/dL", 20.0),
            ("sodium", "Sodium <130 mmol/L", 20.0),
            ("glucose", "Glucose ≥250 mg/dL", 10.0),
            ("hematocrit", "Hematocrit <30%", 10.0),
            ("oxygenation", "PaO₂ <60 mmHg or SaO₂ <90%", 10.0),
            ("pleural_effusion", "Pleural effusion on imaging", 10.0),
        ]
        .iter()
        .map(|(id, label, weight)| Criterion::fixed(id, label, *weight)),
    );

    define(
        Header {
            id: "psi",
            name: "Pneumonia Severity Index (PSI/PORT)",
            description: "30-day mortality risk class for community-acquired pneumonia.",
            source: "Fine MJ, et al. N Engl J Med. 1997;336(4):243-250.",
        },
        Method::Criteria(CriteriaSpec {
            base_offset: 0.0,
            criteria,
        }),
        bands(&[
            (0.0, 70.0, "Class I–II", "Mortality 0.1–0.6%; outpatient care."),
            (71.0, 90.0, "Class III", "Mortality 0.9–2.8%; outpatient or brief observation."),
            (91.0, 130.0, "Class IV", "Mortality 8.2–9.3%; inpatient care."),
            (131.0, 400.0, "Class V", "Mortality 27–31%; inpatient care, consider ICU."),
        ]),
        None,
    )
}
