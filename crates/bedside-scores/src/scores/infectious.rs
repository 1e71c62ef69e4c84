use super::{bands, checklist, define, groups, Header};
use crate::definition::{Group, ScoreDefinition};

pub(super) fn definitions() -> Vec<ScoreDefinition> {
    vec![centor(), mcisaac(), qsofa()]
}

fn centor() -> ScoreDefinition {
    define(
        Header {
            id: "centor",
            name: "Centor Score",
            description: "Likelihood of group A streptococcal pharyngitis in adults with sore throat.",
            source: "Centor RM, et al. Med Decis Making. 1981;1(3):239-246.",
        },
        checklist(
            0.0,
            &[
                ("tonsillar_exudate", "Tonsillar exudate or swelling", 1.0),
                ("tender_anterior_nodes", "Tender or swollen anterior cervical nodes", 1.0),
                ("fever", "History of fever (>38 °C)", 1.0),
                ("absence_of_cough", "Absence of cough", 1.0),
            ],
        ),
        bands(&[
            (0.0, 1.0, "Low", "GAS unlikely; no testing or antibiotics."),
            (2.0, 3.0, "Intermediate", "Rapid antigen test or culture; treat if positive."),
            (4.0, 4.0, "High", "Test, or consider empiric antibiotics."),
        ]),
        None,
    )
}

fn mcisaac() -> ScoreDefinition {
    let yes_no = [("No", 0.0), ("Yes", 1.0)];
    define(
        Header {
            id: "mcisaac",
            name: "McIsaac (Modified Centor) Score",
            description: "Centor criteria adjusted for age, for patients 3 years and older.",
            source: "McIsaac WJ, et al. CMAJ. 1998;158(1):75-83.",
        },
        groups(vec![
            Group::new("exudate", "Tonsillar exudate or swelling", &yes_no),
            Group::new("anterior_nodes", "Tender or swollen anterior cervical nodes", &yes_no),
            Group::new("temperature", "Temperature >38 °C", &yes_no),
            Group::new(
                "cough",
                "Cough",
                &[("Cough present", 0.0), ("Cough absent", 1.0)],
            ),
            Group::new(
                "age",
                "Age",
                &[("3–14 years", 1.0), ("15–44 years", 0.0), ("45 years or older", -1.0)],
            ),
        ]),
        bands(&[
            (-1.0, 0.0, "Very low", "Streptococcal risk 1–2.5%; no testing or antibiotics."),
            (1.0, 1.0, "Low", "Risk 5–10%; no testing or antibiotics."),
            (2.0, 3.0, "Moderate", "Risk 11–35%; culture or rapid antigen test."),
            (4.0, 5.0, "High", "Risk 51–53%; test and consider empiric treatment."),
        ]),
        None,
    )
}

fn qsofa() -> ScoreDefinition {
    define(
        Header {
            id: "qsofa",
            name: "qSOFA",
            description: "Bedside screen for infected patients at risk of poor outcome outside the ICU.",
            source: "Seymour CW, et al. JAMA. 2016;315(8):762-774.",
        },
        checklist(
            0.0,
            &[
                ("respiratory_rate", "Respiratory rate ≥22/min", 1.0),
                ("altered_mentation", "Altered mentation (GCS <15)", 1.0),
                ("systolic_bp", "Systolic blood pressure ≤100 mmHg", 1.0),
            ],
        ),
        bands(&[
            (0.0, 1.0, "Not high risk", "Continue monitoring; reassess if condition changes."),
            (2.0, 3.0, "High risk", "Assess for organ dysfunction; consider escalation of care."),
        ]),
        None,
    )
}
