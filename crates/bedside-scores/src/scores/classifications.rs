use super::{define, Header};
use crate::definition::{Method, ScoreDefinition};

pub(super) fn definitions() -> Vec<ScoreDefinition> {
    vec![
        narrative(
            Header {
                id: "nyha",
                name: "NYHA Functional Classification",
                description: "Functional limitation in heart failure.",
                source: "The Criteria Committee of the New York Heart Association. 9th ed. 1994.",
            },
            "Class I: No limitation of physical activity.\n\
             Class II: Slight limitation; ordinary activity causes fatigue, palpitation or dyspnoea.\n\
             Class III: Marked limitation; less than ordinary activity causes symptoms.\n\
             Class IV: Symptoms at rest; any physical activity increases discomfort.",
        ),
        narrative(
            Header {
                id: "mallampati",
                name: "Modified Mallampati Classification",
                description: "Oropharyngeal view as a predictor of difficult intubation.",
                source: "Samsoon GL, Young JR. Anaesthesia. 1987;42(5):487-490.",
            },
            "Class I: Soft palate, fauces, uvula and pillars visible.\n\
             Class II: Soft palate, fauces and uvula visible.\n\
             Class III: Soft palate and base of uvula visible.\n\
             Class IV: Only hard palate visible.",
        ),
        narrative(
            Header {
                id: "killip",
                name: "Killip Classification",
                description: "Heart failure severity after acute myocardial infarction.",
                source: "Killip T, Kimball JT. Am J Cardiol. 1967;20(4):457-464.",
            },
            "Class I: No clinical signs of heart failure.\n\
             Class II: Rales, S3 gallop or elevated jugular venous pressure.\n\
             Class III: Frank acute pulmonary oedema.\n\
             Class IV: Cardiogenic shock.",
        ),
        narrative(
            Header {
                id: "forrest",
                name: "Forrest Classification",
                description: "Endoscopic appearance of peptic ulcer bleeding and rebleeding risk.",
                source: "Forrest JA, et al. Lancet. 1974;2(7877):394-397.",
            },
            "Ia: Spurting haemorrhage (high risk).\n\
             Ib: Oozing haemorrhage (high risk).\n\
             IIa: Non-bleeding visible vessel (high risk).\n\
             IIb: Adherent clot (intermediate risk).\n\
             IIc: Flat pigmented spot (low risk).\n\
             III: Clean ulcer base (low risk).",
        ),
    ]
}

fn narrative(header: Header<'_>, text: &str) -> ScoreDefinition {
    define(
        header,
        Method::Informational {
            text: text.to_string(),
        },
        Vec::new(),
        None,
    )
}
