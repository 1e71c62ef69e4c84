use super::{bands, define, fields, Header};
use crate::definition::{Band, InputField, ScoreDefinition};

pub(super) fn definitions() -> Vec<ScoreDefinition> {
    vec![
        ldl_friedewald(),
        ldl_tg_adjusted(),
        tc_hdl_ratio(),
        bun_creatinine_ratio(),
        cockcroft_gault(),
        egfr_ckd_epi_2021(),
        corrected_calcium(),
        anion_gap(),
        corrected_sodium(),
        glucose_mgdl_to_mmol(),
        creatinine_mgdl_to_umol(),
    ]
}

fn lipid_fields() -> Vec<InputField> {
    vec![
        InputField::number("total_cholesterol", "Total cholesterol", "mg/dL").bounded(0.0, 1000.0),
        InputField::number("hdl", "HDL cholesterol", "mg/dL").bounded(0.0, 300.0),
        InputField::number("triglycerides", "Triglycerides", "mg/dL").bounded(0.0, 5000.0),
    ]
}

fn ldl_bands() -> Vec<Band> {
    bands(&[
        (0.0, 99.0, "Optimal", "LDL cholesterol at goal for most patients."),
        (100.0, 129.0, "Near optimal", "Near or above optimal."),
        (130.0, 159.0, "Borderline high", "Lifestyle therapy; consider overall risk."),
        (160.0, 189.0, "High", "Consider statin therapy per overall risk."),
        (190.0, 1000.0, "Very high", "Statin therapy indicated; evaluate for familial hypercholesterolaemia."),
    ])
}

fn ldl_friedewald() -> ScoreDefinition {
    define(
        Header {
            id: "ldl_friedewald",
            name: "LDL Cholesterol (Friedewald)",
            description: "Calculated LDL = total cholesterol − HDL − triglycerides/5. Not valid above 400 mg/dL triglycerides.",
            source: "Friedewald WT, et al. Clin Chem. 1972;18(6):499-502.",
        },
        fields(lipid_fields()),
        ldl_bands(),
        Some("mg/dL"),
    )
}

fn ldl_tg_adjusted() -> ScoreDefinition {
    define(
        Header {
            id: "ldl_tg_adjusted",
            name: "LDL Cholesterol (Triglyceride-Adjusted Factor)",
            description: "Calculated LDL with the triglyceride:VLDL factor chosen from the triglyceride level.",
            source: "Martin SS, et al. JAMA. 2013;310(19):2061-2068.",
        },
        fields(lipid_fields()),
        ldl_bands(),
        Some("mg/dL"),
    )
}

fn tc_hdl_ratio() -> ScoreDefinition {
    define(
        Header {
            id: "tc_hdl_ratio",
            name: "Total Cholesterol / HDL Ratio",
            description: "Atherogenic lipid ratio.",
            source: "Castelli WP, et al. Can J Cardiol. 1988;4 Suppl A:5A-10A.",
        },
        fields(vec![
            InputField::number("total_cholesterol", "Total cholesterol", "mg/dL").bounded(0.0, 1000.0),
            InputField::number("hdl", "HDL cholesterol", "mg/dL").bounded(0.0, 300.0),
        ]),
        bands(&[
            (0.0, 3.4, "Optimal", "Low atherogenic risk."),
            (3.5, 5.0, "Average", "Average risk."),
            (5.1, 100.0, "Elevated", "Increased cardiovascular risk."),
        ]),
        None,
    )
}

fn bun_creatinine_ratio() -> ScoreDefinition {
    define(
        Header {
            id: "bun_creatinine_ratio",
            name: "BUN / Creatinine Ratio",
            description: "Helps separate prerenal from intrinsic causes of azotaemia.",
            source: "Baum N, et al. Urology. 1975;5(5):583-588.",
        },
        fields(vec![
            InputField::number("bun", "Blood urea nitrogen", "mg/dL").bounded(0.0, 300.0),
            InputField::number("creatinine", "Serum creatinine", "mg/dL").bounded(0.0, 30.0),
        ]),
        bands(&[
            (0.0, 9.0, "Low", "Consider intrinsic renal disease, low protein intake or liver disease."),
            (10.0, 20.0, "Normal", "Within the usual range."),
            (21.0, 1000.0, "Elevated", "Suggests prerenal azotaemia or upper GI bleeding."),
        ]),
        None,
    )
}

fn cockcroft_gault() -> ScoreDefinition {
    define(
        Header {
            id: "cockcroft_gault",
            name: "Creatinine Clearance (Cockcroft-Gault)",
            description: "Estimated creatinine clearance for drug dosing.",
            source: "Cockcroft DW, Gault MH. Nephron. 1976;16(1):31-41.",
        },
        fields(vec![
            InputField::number("age", "Age", "years").bounded(18.0, 120.0),
            InputField::number("weight", "Weight", "kg").bounded(1.0, 400.0),
            InputField::number("creatinine", "Serum creatinine", "mg/dL").bounded(0.0, 30.0),
            InputField::toggle("female", "Female"),
        ]),
        bands(&[
            (0.0, 14.0, "<15 mL/min", "Kidney failure range."),
            (15.0, 29.0, "15–29 mL/min", "Severely reduced clearance."),
            (30.0, 59.0, "30–59 mL/min", "Moderately reduced clearance."),
            (60.0, 89.0, "60–89 mL/min", "Mildly reduced clearance."),
            (90.0, 1000.0, "≥90 mL/min", "Normal clearance."),
        ]),
        Some("mL/min"),
    )
}

fn egfr_ckd_epi_2021() -> ScoreDefinition {
    define(
        Header {
            id: "egfr_ckd_epi_2021",
            name: "eGFR (CKD-EPI 2021)",
            description: "Race-free creatinine-based estimated GFR for adults.",
            source: "Inker LA, et al. N Engl J Med. 2021;385(19):1737-1749.",
        },
        fields(vec![
            InputField::number("creatinine", "Serum creatinine", "mg/dL").bounded(0.0, 30.0),
            InputField::number("age", "Age", "years").bounded(18.0, 120.0),
            InputField::toggle("female", "Female"),
        ]),
        bands(&[
            (0.0, 14.0, "G5", "Kidney failure."),
            (15.0, 29.0, "G4", "Severely decreased GFR."),
            (30.0, 44.0, "G3b", "Moderately to severely decreased GFR."),
            (45.0, 59.0, "G3a", "Mildly to moderately decreased GFR."),
            (60.0, 89.0, "G2", "Mildly decreased GFR."),
            (90.0, 500.0, "G1", "Normal or high GFR."),
        ]),
        Some("mL/min/1.73 m²"),
    )
}

fn corrected_calcium() -> ScoreDefinition {
    define(
        Header {
            id: "corrected_calcium",
            name: "Calcium Corrected for Albumin",
            description: "Total calcium adjusted by 0.8 mg/dL per g/dL of albumin below 4.",
            source: "Payne RB, et al. Br Med J. 1973;4(5893):643-646.",
        },
        fields(vec![
            InputField::number("calcium", "Total calcium", "mg/dL").bounded(0.0, 30.0),
            InputField::number("albumin", "Albumin", "g/dL").bounded(0.0, 10.0),
        ]),
        bands(&[
            (0.0, 8.4, "Low", "Hypocalcaemia."),
            (8.5, 10.5, "Normal", "Within the reference range."),
            (10.6, 30.0, "High", "Hypercalcaemia."),
        ]),
        Some("mg/dL"),
    )
}

fn anion_gap() -> ScoreDefinition {
    define(
        Header {
            id: "anion_gap",
            name: "Anion Gap",
            description: "Na − (Cl + HCO₃), for evaluating metabolic acidosis.",
            source: "Emmett M, Narins RG. Medicine (Baltimore). 1977;56(1):38-54.",
        },
        fields(vec![
            InputField::number("sodium", "Sodium", "mEq/L").bounded(0.0, 250.0),
            InputField::number("chloride", "Chloride", "mEq/L").bounded(0.0, 250.0),
            InputField::number("bicarbonate", "Bicarbonate", "mEq/L").bounded(0.0, 100.0),
        ]),
        bands(&[
            (0.0, 2.0, "Low", "Consider hypoalbuminaemia, paraproteinaemia or lab error."),
            (3.0, 12.0, "Normal", "Normal anion gap."),
            (13.0, 100.0, "Elevated", "High anion gap metabolic acidosis."),
        ]),
        Some("mEq/L"),
    )
}

fn corrected_sodium() -> ScoreDefinition {
    define(
        Header {
            id: "corrected_sodium",
            name: "Sodium Corrected for Hyperglycaemia",
            description: "Adds 2.4 mEq/L per 100 mg/dL of glucose above 100.",
            source: "Hillier TA, et al. Am J Med. 1999;106(4):399-403.",
        },
        fields(vec![
            InputField::number("sodium", "Measured sodium", "mEq/L").bounded(0.0, 250.0),
            InputField::number("glucose", "Glucose", "mg/dL").bounded(0.0, 3000.0),
        ]),
        bands(&[
            (0.0, 134.9, "Low", "Hyponatraemia."),
            (135.0, 145.0, "Normal", "Within the reference range."),
            (145.1, 300.0, "High", "Hypernatraemia."),
        ]),
        Some("mEq/L"),
    )
}

fn glucose_mgdl_to_mmol() -> ScoreDefinition {
    define(
        Header {
            id: "glucose_mgdl_to_mmol",
            name: "Glucose mg/dL → mmol/L",
            description: "Unit conversion for blood glucose.",
            source: "Molar mass of glucose 180 g/mol.",
        },
        fields(vec![
            InputField::number("glucose", "Glucose", "mg/dL").bounded(0.0, 5000.0),
        ]),
        Vec::new(),
        Some("mmol/L"),
    )
}

fn creatinine_mgdl_to_umol() -> ScoreDefinition {
    define(
        Header {
            id: "creatinine_mgdl_to_umol",
            name: "Creatinine mg/dL → µmol/L",
            description: "Unit conversion for serum creatinine.",
            source: "Molar mass of creatinine 113.12 g/mol.",
        },
        fields(vec![
            InputField::number("creatinine", "Creatinine", "mg/dL").bounded(0.0, 50.0),
        ]),
        Vec::new(),
        Some("µmol/L"),
    )
}
