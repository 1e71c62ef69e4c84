use super::{bands, checklist, define, Header};
use crate::definition::ScoreDefinition;

pub(super) fn definitions() -> Vec<ScoreDefinition> {
    vec![cha2ds2_vasc(), has_bled(), wells_pe(), wells_dvt(), perc()]
}

fn cha2ds2_vasc() -> ScoreDefinition {
    define(
        Header {
            id: "cha2ds2_vasc",
            name: "CHA₂DS₂-VASc",
            description: "Stroke risk in non-valvular atrial fibrillation.",
            source: "Lip GY, et al. Chest. 2010;137(2):263-272.",
        },
        checklist(
            0.0,
            &[
                ("heart_failure", "Congestive heart failure", 1.0),
                ("hypertension", "Hypertension", 1.0),
                ("age_75", "Age ≥75 years", 2.0),
                ("diabetes", "Diabetes mellitus", 1.0),
                ("stroke", "Prior stroke, TIA or thromboembolism", 2.0),
                ("vascular_disease", "Vascular disease (MI, PAD, aortic plaque)", 1.0),
                ("age_65_74", "Age 65–74 years", 1.0),
                ("female", "Female sex", 1.0),
            ],
        ),
        bands(&[
            (0.0, 0.0, "Low", "Anticoagulation not recommended."),
            (1.0, 1.0, "Low–moderate", "Consider oral anticoagulation (not if the point is sex alone)."),
            (2.0, 9.0, "High", "Oral anticoagulation recommended."),
        ]),
        None,
    )
}

fn has_bled() -> ScoreDefinition {
    define(
        Header {
            id: "has_bled",
            name: "HAS-BLED",
            description: "One-year major bleeding risk on anticoagulation for atrial fibrillation.",
            source: "Pisters R, et al. Chest. 2010;138(5):1093-1100.",
        },
        checklist(
            0.0,
            &[
                ("hypertension", "Uncontrolled hypertension (SBP >160 mmHg)", 1.0),
                ("renal_disease", "Abnormal renal function", 1.0),
                ("liver_disease", "Abnormal liver function", 1.0),
                ("stroke", "Prior stroke", 1.0),
                ("bleeding", "Prior major bleeding or predisposition", 1.0),
                ("labile_inr", "Labile INR", 1.0),
                ("elderly", "Age >65 years", 1.0),
                ("drugs", "Antiplatelet or NSAID use", 1.0),
                ("alcohol", "Alcohol use (≥8 drinks/week)", 1.0),
            ],
        ),
        bands(&[
            (0.0, 0.0, "Low", "About 1.1 major bleeds per 100 patient-years."),
            (1.0, 2.0, "Moderate", "About 1.0–1.9 bleeds per 100 patient-years."),
            (3.0, 9.0, "High", "Caution and regular review; address modifiable risk factors."),
        ]),
        None,
    )
}

fn wells_pe() -> ScoreDefinition {
    define(
        Header {
            id: "wells_pe",
            name: "Wells Criteria for Pulmonary Embolism",
            description: "Pretest probability of pulmonary embolism.",
            source: "Wells PS, et al. Thromb Haemost. 2000;83(3):416-420.",
        },
        checklist(
            0.0,
            &[
                ("dvt_signs", "Clinical signs and symptoms of DVT", 3.0),
                ("pe_most_likely", "PE is the most likely diagnosis", 3.0),
                ("heart_rate", "Heart rate >100/min", 1.5),
                ("immobilization", "Immobilization ≥3 days or surgery in previous 4 weeks", 1.5),
                ("previous_vte", "Previous DVT or PE", 1.5),
                ("hemoptysis", "Hemoptysis", 1.0),
                ("malignancy", "Malignancy (treatment within 6 months or palliative)", 1.0),
            ],
        ),
        bands(&[
            (0.0, 1.5, "Low", "PE prevalence about 1.3%; consider PERC or D-dimer."),
            (2.0, 6.0, "Moderate", "PE prevalence about 16%; D-dimer or imaging."),
            (6.5, 12.5, "High", "PE prevalence about 40%; CT pulmonary angiography."),
        ]),
        None,
    )
}

/// Includes a negative-weight criterion for a competing diagnosis.
fn wells_dvt() -> ScoreDefinition {
    define(
        Header {
            id: "wells_dvt",
            name: "Wells Criteria for DVT",
            description: "Pretest probability of lower-extremity deep vein thrombosis.",
            source: "Wells PS, et al. N Engl J Med. 2003;349(13):1227-1235.",
        },
        checklist(
            0.0,
            &[
                ("active_cancer", "Active cancer", 1.0),
                ("paralysis", "Paralysis, paresis or recent leg cast", 1.0),
                ("bedridden", "Bedridden ≥3 days or major surgery within 12 weeks", 1.0),
                ("localized_tenderness", "Tenderness along the deep venous system", 1.0),
                ("entire_leg_swollen", "Entire leg swollen", 1.0),
                ("calf_swelling", "Calf swelling ≥3 cm versus other leg", 1.0),
                ("pitting_edema", "Pitting edema confined to symptomatic leg", 1.0),
                ("collateral_veins", "Collateral superficial veins", 1.0),
                ("previous_dvt", "Previously documented DVT", 1.0),
                ("alternative_diagnosis", "Alternative diagnosis at least as likely as DVT", -2.0),
            ],
        ),
        bands(&[
            (-2.0, 0.0, "Low", "DVT prevalence about 5%; D-dimer."),
            (1.0, 2.0, "Moderate", "DVT prevalence about 17%; D-dimer or ultrasound."),
            (3.0, 9.0, "High", "DVT prevalence about 53%; compression ultrasound."),
        ]),
        None,
    )
}

fn perc() -> ScoreDefinition {
    define(
        Header {
            id: "perc",
            name: "PERC Rule",
            description: "Rules out PE without testing in patients with low pretest probability.",
            source: "Kline JA, et al. J Thromb Haemost. 2004;2(8):1247-1255.",
        },
        checklist(
            0.0,
            &[
                ("age_50", "Age ≥50 years", 1.0),
                ("heart_rate", "Heart rate ≥100/min", 1.0),
                ("oxygen_saturation", "SaO₂ <95% on room air", 1.0),
                ("leg_swelling", "Unilateral leg swelling", 1.0),
                ("hemoptysis", "Hemoptysis", 1.0),
                ("recent_surgery", "Surgery or trauma within 4 weeks", 1.0),
                ("prior_vte", "Prior PE or DVT", 1.0),
                ("hormone_use", "Oral contraceptive or estrogen use", 1.0),
            ],
        ),
        bands(&[
            (0.0, 0.0, "PERC negative", "PE can be ruled out if pretest probability is <15%."),
            (1.0, 8.0, "PERC positive", "PE cannot be ruled out; proceed with workup."),
        ]),
        None,
    )
}
