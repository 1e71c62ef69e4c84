use super::{bands, checklist, define, groups, Header};
use crate::definition::{Group, ScoreDefinition};

pub(super) fn definitions() -> Vec<ScoreDefinition> {
    vec![glasgow_coma_scale(), aspects()]
}

fn glasgow_coma_scale() -> ScoreDefinition {
    define(
        Header {
            id: "gcs",
            name: "Glasgow Coma Scale",
            description: "Level of consciousness after brain injury.",
            source: "Teasdale G, Jennett B. Lancet. 1974;2(7872):81-84.",
        },
        groups(vec![
            Group::new(
                "eye",
                "Eye opening",
                &[
                    ("None", 1.0),
                    ("To pressure", 2.0),
                    ("To sound", 3.0),
                    ("Spontaneous", 4.0),
                ],
            ),
            Group::new(
                "verbal",
                "Verbal response",
                &[
                    ("None", 1.0),
                    ("Sounds", 2.0),
                    ("Words", 3.0),
                    ("Confused", 4.0),
                    ("Oriented", 5.0),
                ],
            ),
            Group::new(
                "motor",
                "Motor response",
                &[
                    ("None", 1.0),
                    ("Extension", 2.0),
                    ("Abnormal flexion", 3.0),
                    ("Normal flexion", 4.0),
                    ("Localising", 5.0),
                    ("Obeys commands", 6.0),
                ],
            ),
        ]),
        bands(&[
            (3.0, 8.0, "Severe", "Severe brain injury; consider airway protection."),
            (9.0, 12.0, "Moderate", "Moderate brain injury."),
            (13.0, 15.0, "Mild", "Mild brain injury."),
        ]),
        None,
    )
}

/// Starts at 10; each region with early ischaemic change subtracts 1.
fn aspects() -> ScoreDefinition {
    define(
        Header {
            id: "aspects",
            name: "Alberta Stroke Program Early CT Score (ASPECTS)",
            description: "Extent of early ischaemic change in the MCA territory on non-contrast CT.",
            source: "Barber PA, et al. Lancet. 2000;355(9216):1670-1674.",
        },
        checklist(
            10.0,
            &[
                ("caudate", "Caudate", -1.0),
                ("lentiform", "Lentiform nucleus", -1.0),
                ("internal_capsule", "Internal capsule", -1.0),
                ("insular_ribbon", "Insular ribbon", -1.0),
                ("m1", "M1 (anterior MCA cortex)", -1.0),
                ("m2", "M2 (MCA cortex lateral to insula)", -1.0),
                ("m3", "M3 (posterior MCA cortex)", -1.0),
                ("m4", "M4 (anterior territory above M1)", -1.0),
                ("m5", "M5 (lateral territory above M2)", -1.0),
                ("m6", "M6 (posterior territory above M3)", -1.0),
            ],
        ),
        bands(&[
            (0.0, 7.0, "Unfavourable", "Extensive early ischaemia; worse functional outcome and higher haemorrhage risk."),
            (8.0, 10.0, "Favourable", "Limited early ischaemic change."),
        ]),
        None,
    )
}
