use super::{bands, define, groups, Header};
use crate::definition::{Group, ScoreDefinition};

const FREQUENCY: [(&str, f64); 4] = [
    ("Not at all", 0.0),
    ("Several days", 1.0),
    ("More than half the days", 2.0),
    ("Nearly every day", 3.0),
];

pub(super) fn definitions() -> Vec<ScoreDefinition> {
    vec![phq9(), gad7()]
}

fn frequency_items(items: &[(&str, &str)]) -> Vec<Group> {
    items
        .iter()
        .map(|(id, label)| Group::new(id, label, &FREQUENCY))
        .collect()
}

fn phq9() -> ScoreDefinition {
    define(
        Header {
            id: "phq9",
            name: "PHQ-9",
            description: "Depression severity over the last two weeks.",
            source: "Kroenke K, et al. J Gen Intern Med. 2001;16(9):606-613.",
        },
        groups(frequency_items(&[
            ("interest", "Little interest or pleasure in doing things"),
            ("mood", "Feeling down, depressed, or hopeless"),
            ("sleep", "Trouble falling or staying asleep, or sleeping too much"),
            ("energy", "Feeling tired or having little energy"),
            ("appetite", "Poor appetite or overeating"),
            ("self_esteem", "Feeling bad about yourself"),
            ("concentration", "Trouble concentrating"),
            ("psychomotor", "Moving or speaking slowly, or being fidgety or restless"),
            ("self_harm", "Thoughts that you would be better off dead or of hurting yourself"),
        ])),
        bands(&[
            (0.0, 4.0, "Minimal", "Monitor; may not require treatment."),
            (5.0, 9.0, "Mild", "Watchful waiting; repeat PHQ-9 at follow-up."),
            (10.0, 14.0, "Moderate", "Treatment plan: counselling, follow-up and/or pharmacotherapy."),
            (15.0, 19.0, "Moderately severe", "Active treatment with pharmacotherapy and/or psychotherapy."),
            (20.0, 27.0, "Severe", "Immediate pharmacotherapy; expedited referral if poor response."),
        ]),
        None,
    )
}

fn gad7() -> ScoreDefinition {
    define(
        Header {
            id: "gad7",
            name: "GAD-7",
            description: "Generalised anxiety disorder severity over the last two weeks.",
            source: "Spitzer RL, et al. Arch Intern Med. 2006;166(10):1092-1097.",
        },
        groups(frequency_items(&[
            ("nervous", "Feeling nervous, anxious, or on edge"),
            ("uncontrolled_worry", "Not being able to stop or control worrying"),
            ("excessive_worry", "Worrying too much about different things"),
            ("trouble_relaxing", "Trouble relaxing"),
            ("restless", "Being so restless that it is hard to sit still"),
            ("irritable", "Becoming easily annoyed or irritable"),
            ("afraid", "Feeling afraid as if something awful might happen"),
        ])),
        bands(&[
            (0.0, 4.0, "Minimal", "Minimal anxiety."),
            (5.0, 9.0, "Mild", "Mild anxiety; monitor."),
            (10.0, 14.0, "Moderate", "Moderate anxiety; further evaluation recommended."),
            (15.0, 21.0, "Severe", "Severe anxiety; active treatment warranted."),
        ]),
        None,
    )
}
