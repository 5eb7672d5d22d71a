/// Ordered category names, index-aligned with one classifier's output vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSet {
    name: &'static str,
    labels: &'static [&'static str],
}

impl LabelSet {
    pub const fn new(name: &'static str, labels: &'static [&'static str]) -> Self {
        Self { name, labels }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.labels.get(index).copied()
    }

    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| *l == label)
    }
}

/// Labels of the 3-class initial screening model
pub const SCREENING_LABELS: LabelSet =
    LabelSet::new("screening", &["normal", "skin_disease", "NotSkinImages"]);

/// Labels of the 10-class skin condition model
pub const CONDITION_LABELS: LabelSet = LabelSet::new(
    "condition",
    &[
        "Hives",
        "Cold Sore",
        "psoriasis",
        "cellulitis",
        "ringworm",
        "lupus",
        "acne",
        "eczema",
        "dry skin",
        "dermatitis",
    ],
);

/// Top entry of a probability vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: &'static str,
    pub index: usize,
    pub confidence: f32,
}

/// What a classification flow discloses to the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Identified(Prediction),
    /// Confidence fell below the policy threshold. The raw prediction is kept
    /// for diagnostics only and is never reported.
    Unknown { raw: Prediction },
}

impl Outcome {
    pub const UNKNOWN_LABEL: &'static str = "Unknown skin disease";

    /// Label shown to the user
    pub fn reported_label(&self) -> &'static str {
        match self {
            Outcome::Identified(prediction) => prediction.label,
            Outcome::Unknown { .. } => Self::UNKNOWN_LABEL,
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Outcome::Identified(prediction) => Some(prediction),
            Outcome::Unknown { .. } => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Outcome::Unknown { .. })
    }
}
