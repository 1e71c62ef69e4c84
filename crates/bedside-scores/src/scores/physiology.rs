use super::{bands, define, fields, Header};
use crate::definition::{InputField, ScoreDefinition};

pub(super) fn definitions() -> Vec<ScoreDefinition> {
    vec![
        shock_index(),
        mean_arterial_pressure(),
        pf_ratio(),
        qtc_bazett(),
        bmi(),
        maintenance_fluids_daily(),
        maintenance_fluids_hourly(),
        parkland(),
        weight_lb_to_kg(),
        temperature_f_to_c(),
    ]
}

fn shock_index() -> ScoreDefinition {
    define(
        Header {
            id: "shock_index",
            name: "Shock Index",
            description: "Heart rate divided by systolic blood pressure.",
            source: "Allgöwer M, Burri C. Dtsch Med Wochenschr. 1967;92(43):1947-1950.",
        },
        fields(vec![
            InputField::number("heart_rate", "Heart rate", "bpm").bounded(0.0, 300.0),
            InputField::number("systolic_bp", "Systolic blood pressure", "mmHg").bounded(0.0, 300.0),
        ]),
        bands(&[
            (0.0, 0.7, "Normal", "No haemodynamic compromise suggested."),
            (0.71, 0.99, "Elevated", "Possible occult hypoperfusion; reassess."),
            (1.0, 10.0, "High", "Suggests significant hypovolaemia or shock."),
        ]),
        None,
    )
}

fn mean_arterial_pressure() -> ScoreDefinition {
    define(
        Header {
            id: "mean_arterial_pressure",
            name: "Mean Arterial Pressure",
            description: "(SBP + 2 × DBP) / 3.",
            source: "Standard haemodynamic approximation.",
        },
        fields(vec![
            InputField::number("systolic_bp", "Systolic blood pressure", "mmHg").bounded(0.0, 300.0),
            InputField::number("diastolic_bp", "Diastolic blood pressure", "mmHg").bounded(0.0, 300.0),
        ]),
        bands(&[
            (0.0, 64.0, "Low", "Below the usual perfusion target of 65 mmHg."),
            (65.0, 100.0, "Normal", "Adequate perfusion pressure."),
            (101.0, 300.0, "High", "Elevated mean arterial pressure."),
        ]),
        Some("mmHg"),
    )
}

fn pf_ratio() -> ScoreDefinition {
    define(
        Header {
            id: "pf_ratio",
            name: "PaO₂/FiO₂ Ratio",
            description: "Oxygenation index used in the Berlin ARDS definition.",
            source: "ARDS Definition Task Force. JAMA. 2012;307(23):2526-2533.",
        },
        fields(vec![
            InputField::number("pao2", "PaO₂", "mmHg").bounded(0.0, 800.0),
            InputField::number("fio2", "FiO₂", "fraction").bounded(0.21, 1.0),
        ]),
        bands(&[
            (0.0, 100.0, "Severe", "Severe ARDS range (if other criteria met)."),
            (101.0, 200.0, "Moderate", "Moderate ARDS range."),
            (201.0, 300.0, "Mild", "Mild ARDS range."),
            (301.0, 1000.0, "Not ARDS range", "Oxygenation above ARDS thresholds."),
        ]),
        Some("mmHg"),
    )
}

fn qtc_bazett() -> ScoreDefinition {
    define(
        Header {
            id: "qtc_bazett",
            name: "Corrected QT (Bazett)",
            description: "QT interval corrected for heart rate.",
            source: "Bazett HC. Heart. 1920;7:353-370.",
        },
        fields(vec![
            InputField::number("qt", "QT interval", "ms").bounded(0.0, 1000.0),
            InputField::number("heart_rate", "Heart rate", "bpm").bounded(0.0, 300.0),
        ]),
        bands(&[
            (0.0, 440.0, "Normal", "QTc within normal limits."),
            (441.0, 500.0, "Prolonged", "Review QT-prolonging drugs and electrolytes."),
            (501.0, 2000.0, "Markedly prolonged", "High risk of torsades de pointes."),
        ]),
        Some("ms"),
    )
}

fn bmi() -> ScoreDefinition {
    define(
        Header {
            id: "bmi",
            name: "Body Mass Index",
            description: "Weight (kg) divided by height (m) squared.",
            source: "WHO. Obesity: preventing and managing the global epidemic. 2000.",
        },
        fields(vec![
            InputField::number("weight", "Weight", "kg").bounded(0.0, 700.0),
            InputField::number("height", "Height", "cm").bounded(0.0, 300.0),
        ]),
        bands(&[
            (0.0, 18.4, "Underweight", "Below healthy weight range."),
            (18.5, 24.9, "Normal", "Healthy weight range."),
            (25.0, 29.9, "Overweight", "Increased risk of comorbidities."),
            (30.0, 34.9, "Obesity class I", "Moderate risk."),
            (35.0, 39.9, "Obesity class II", "Severe risk."),
            (40.0, 200.0, "Obesity class III", "Very severe risk."),
        ]),
        Some("kg/m²"),
    )
}

fn maintenance_fluids_daily() -> ScoreDefinition {
    define(
        Header {
            id: "maintenance_fluids_daily",
            name: "Maintenance Fluids (Holliday-Segar, daily)",
            description: "100 mL/kg for the first 10 kg, 50 mL/kg for the next 10 kg, 20 mL/kg thereafter.",
            source: "Holliday MA, Segar WE. Pediatrics. 1957;19(5):823-832.",
        },
        fields(vec![
            InputField::number("weight", "Weight", "kg").bounded(0.0, 300.0),
        ]),
        Vec::new(),
        Some("mL/day"),
    )
}

fn maintenance_fluids_hourly() -> ScoreDefinition {
    define(
        Header {
            id: "maintenance_fluids_hourly",
            name: "Maintenance Fluids (4-2-1 rule, hourly)",
            description: "4 mL/kg/h for the first 10 kg, 2 mL/kg/h for the next 10 kg, 1 mL/kg/h thereafter.",
            source: "Holliday MA, Segar WE. Pediatrics. 1957;19(5):823-832.",
        },
        fields(vec![
            InputField::number("weight", "Weight", "kg").bounded(0.0, 300.0),
        ]),
        Vec::new(),
        Some("mL/h"),
    )
}

fn parkland() -> ScoreDefinition {
    define(
        Header {
            id: "parkland",
            name: "Parkland Formula",
            description: "Crystalloid volume for the first 24 h after a burn; half in the first 8 h.",
            source: "Baxter CR, Shires T. Ann N Y Acad Sci. 1968;150(3):874-894.",
        },
        fields(vec![
            InputField::number("weight", "Weight", "kg").bounded(0.0, 400.0),
            InputField::number("tbsa", "Burned body surface area", "%").bounded(0.0, 100.0),
        ]),
        Vec::new(),
        Some("mL/24 h"),
    )
}

fn weight_lb_to_kg() -> ScoreDefinition {
    define(
        Header {
            id: "weight_lb_to_kg",
            name: "Weight lb → kg",
            description: "Unit conversion for body weight.",
            source: "1 lb = 0.45359237 kg.",
        },
        fields(vec![
            InputField::number("weight_lb", "Weight", "lb").bounded(0.0, 1500.0),
        ]),
        Vec::new(),
        Some("kg"),
    )
}

fn temperature_f_to_c() -> ScoreDefinition {
    define(
        Header {
            id: "temperature_f_to_c",
            name: "Temperature °F → °C",
            description: "Unit conversion for body temperature.",
            source: "°C = (°F − 32) × 5/9.",
        },
        fields(vec![
            InputField::number("temperature_f", "Temperature", "°F").bounded(50.0, 115.0),
        ]),
        Vec::new(),
        Some("°C"),
    )
}
