use super::{bands, define, groups, Header};
use crate::definition::{Group, ScoreDefinition};

pub(super) fn definitions() -> Vec<ScoreDefinition> {
    vec![apgar(), bishop()]
}

fn apgar() -> ScoreDefinition {
    define(
        Header {
            id: "apgar",
            name: "APGAR Score",
            description: "Newborn condition at 1 and 5 minutes after birth.",
            source: "Apgar V. Curr Res Anesth Analg. 1953;32(4):260-267.",
        },
        groups(vec![
            Group::new(
                "appearance",
                "Appearance (skin colour)",
                &[
                    ("Blue or pale all over", 0.0),
                    ("Blue extremities, pink body", 1.0),
                    ("Pink all over", 2.0),
                ],
            ),
            Group::new(
                "pulse",
                "Pulse",
                &[("Absent", 0.0), ("<100 bpm", 1.0), ("≥100 bpm", 2.0)],
            ),
            Group::new(
                "grimace",
                "Grimace (reflex irritability)",
                &[("No response", 0.0), ("Grimace", 1.0), ("Cry or active withdrawal", 2.0)],
            ),
            Group::new(
                "activity",
                "Activity (muscle tone)",
                &[("Limp", 0.0), ("Some flexion", 1.0), ("Active motion", 2.0)],
            ),
            Group::new(
                "respiration",
                "Respiration",
                &[("Absent", 0.0), ("Weak or irregular", 1.0), ("Strong cry", 2.0)],
            ),
        ]),
        bands(&[
            (0.0, 3.0, "Severely depressed", "Immediate resuscitation."),
            (4.0, 6.0, "Moderately abnormal", "May need stimulation or respiratory support."),
            (7.0, 10.0, "Reassuring", "Routine newborn care."),
        ]),
        None,
    )
}

fn bishop() -> ScoreDefinition {
    define(
        Header {
            id: "bishop",
            name: "Bishop Score",
            description: "Cervical readiness for induction of labour.",
            source: "Bishop EH. Obstet Gynecol. 1964;24:266-268.",
        },
        groups(vec![
            Group::new(
                "dilation",
                "Dilation",
                &[("Closed", 0.0), ("1–2 cm", 1.0), ("3–4 cm", 2.0), ("≥5 cm", 3.0)],
            ),
            Group::new(
                "effacement",
                "Effacement",
                &[("0–30%", 0.0), ("40–50%", 1.0), ("60–70%", 2.0), ("≥80%", 3.0)],
            ),
            Group::new(
                "station",
                "Fetal station",
                &[("−3", 0.0), ("−2", 1.0), ("−1 or 0", 2.0), ("+1 or +2", 3.0)],
            ),
            Group::new(
                "consistency",
                "Cervical consistency",
                &[("Firm", 0.0), ("Medium", 1.0), ("Soft", 2.0)],
            ),
            Group::new(
                "position",
                "Cervical position",
                &[("Posterior", 0.0), ("Mid", 1.0), ("Anterior", 2.0)],
            ),
        ]),
        bands(&[
            (0.0, 5.0, "Unfavourable", "Cervical ripening likely required before induction."),
            (6.0, 7.0, "Indeterminate", "Induction success uncertain."),
            (8.0, 13.0, "Favourable", "Induction likely to succeed."),
        ]),
        None,
    )
}
