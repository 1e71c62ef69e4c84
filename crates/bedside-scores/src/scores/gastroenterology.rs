use super::{bands, checklist, define, fields, groups, Header};
use crate::definition::{Group, InputField, ScoreDefinition};

pub(super) fn definitions() -> Vec<ScoreDefinition> {
    vec![alvarado(), child_pugh(), meld()]
}

fn alvarado() -> ScoreDefinition {
    define(
        Header {
            id: "alvarado",
            name: "Alvarado Score",
            description: "Likelihood of acute appendicitis.",
            source: "Alvarado A. Ann Emerg Med. 1986;15(5):557-564.",
        },
        checklist(
            0.0,
            &[
                ("migration", "Migration of pain to the right lower quadrant", 1.0),
                ("anorexia", "Anorexia", 1.0),
                ("nausea", "Nausea or vomiting", 1.0),
                ("rlq_tenderness", "Right lower quadrant tenderness", 2.0),
                ("rebound", "Rebound tenderness", 1.0),
                ("fever", "Temperature ≥37.3 °C", 1.0),
                ("leukocytosis", "Leukocytosis >10,000/µL", 2.0),
                ("left_shift", "Neutrophil left shift", 1.0),
            ],
        ),
        bands(&[
            (0.0, 4.0, "Unlikely", "Appendicitis unlikely."),
            (5.0, 6.0, "Possible", "Compatible with appendicitis; observe or image."),
            (7.0, 8.0, "Probable", "Appendicitis probable; surgical consultation."),
            (9.0, 10.0, "Very probable", "Appendicitis very probable."),
        ]),
        None,
    )
}

fn child_pugh() -> ScoreDefinition {
    define(
        Header {
            id: "child_pugh",
            name: "Child-Pugh Score",
            description: "Severity of chronic liver disease.",
            source: "Pugh RN, et al. Br J Surg. 1973;60(8):646-649.",
        },
        groups(vec![
            Group::new(
                "bilirubin",
                "Total bilirubin",
                &[("<2 mg/dL", 1.0), ("2–3 mg/dL", 2.0), (">3 mg/dL", 3.0)],
            ),
            Group::new(
                "albumin",
                "Serum albumin",
                &[(">3.5 g/dL", 1.0), ("2.8–3.5 g/dL", 2.0), ("<2.8 g/dL", 3.0)],
            ),
            Group::new(
                "inr",
                "INR",
                &[("<1.7", 1.0), ("1.7–2.3", 2.0), (">2.3", 3.0)],
            ),
            Group::new(
                "ascites",
                "Ascites",
                &[("None", 1.0), ("Mild", 2.0), ("Moderate to severe", 3.0)],
            ),
            Group::new(
                "encephalopathy",
                "Hepatic encephalopathy",
                &[("None", 1.0), ("Grade 1–2", 2.0), ("Grade 3–4", 3.0)],
            ),
        ]),
        bands(&[
            (5.0, 6.0, "Class A", "Well-compensated disease; 1-year survival about 100%."),
            (7.0, 9.0, "Class B", "Significant functional compromise; 1-year survival about 80%."),
            (10.0, 15.0, "Class C", "Decompensated disease; 1-year survival about 45%."),
        ]),
        None,
    )
}

fn meld() -> ScoreDefinition {
    define(
        Header {
            id: "meld",
            name: "MELD Score",
            description: "Model for End-Stage Liver Disease; 3-month mortality in chronic liver disease.",
            source: "Kamath PS, et al. Hepatology. 2001;33(2):464-470.",
        },
        fields(vec![
            InputField::number("bilirubin", "Total bilirubin", "mg/dL").bounded(0.0, 100.0),
            InputField::number("inr", "INR", "ratio").bounded(0.0, 20.0),
            InputField::number("creatinine", "Serum creatinine", "mg/dL").bounded(0.0, 30.0),
            InputField::toggle("dialysis", "Dialysis at least twice in the past week"),
        ]),
        bands(&[
            (6.0, 9.0, "MELD <10", "3-month mortality about 1.9%."),
            (10.0, 19.0, "MELD 10–19", "3-month mortality about 6.0%."),
            (20.0, 29.0, "MELD 20–29", "3-month mortality about 19.6%."),
            (30.0, 39.0, "MELD 30–39", "3-month mortality about 52.6%."),
            (40.0, 40.0, "MELD ≥40", "3-month mortality about 71.3%."),
        ]),
        None,
    )
}
