use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{DermaError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkinCondition {
    Acne,
    Cellulitis,
    ColdSore,
    Dermatitis,
    DrySkin,
    Eczema,
    Hives,
    Lupus,
    Psoriasis,
    Ringworm,
}

impl SkinCondition {
    pub const ALL: [SkinCondition; 10] = [
        SkinCondition::Acne,
        SkinCondition::Cellulitis,
        SkinCondition::ColdSore,
        SkinCondition::Dermatitis,
        SkinCondition::DrySkin,
        SkinCondition::Eczema,
        SkinCondition::Hives,
        SkinCondition::Lupus,
        SkinCondition::Psoriasis,
        SkinCondition::Ringworm,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            SkinCondition::Acne => "Acne",
            SkinCondition::Cellulitis => "Cellulitis",
            SkinCondition::ColdSore => "Cold Sore",
            SkinCondition::Dermatitis => "Dermatitis",
            SkinCondition::DrySkin => "Dry Skin",
            SkinCondition::Eczema => "Eczema",
            SkinCondition::Hives => "Hives",
            SkinCondition::Lupus => "Lupus",
            SkinCondition::Psoriasis => "Psoriasis",
            SkinCondition::Ringworm => "Ringworm",
        }
    }

    /// Case-insensitive lookup by display name; also accepts the condition
    /// classifier's labels (e.g. "dry skin")
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SkinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SkinCondition {
    type Err = DermaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| DermaError::NotFound {
            disease: s.to_string(),
            status: String::new(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiabeticStatus {
    Yes,
    No,
}

impl DiabeticStatus {
    pub const ALL: [DiabeticStatus; 2] = [DiabeticStatus::Yes, DiabeticStatus::No];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "yes" => Some(DiabeticStatus::Yes),
            "no" => Some(DiabeticStatus::No),
            _ => None,
        }
    }
}

impl From<bool> for DiabeticStatus {
    fn from(diabetic: bool) -> Self {
        if diabetic {
            DiabeticStatus::Yes
        } else {
            DiabeticStatus::No
        }
    }
}

impl fmt::Display for DiabeticStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiabeticStatus::Yes => "Yes",
            DiabeticStatus::No => "No",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub precaution: &'static str,
    pub food: &'static str,
}

const fn rec(precaution: &'static str, food: &'static str) -> Recommendation {
    Recommendation { precaution, food }
}

/// (condition, advice when not diabetic, advice when diabetic)
const ENTRIES: [(SkinCondition, Recommendation, Recommendation); 10] = [
    (
        SkinCondition::Acne,
        rec("Avoid alcohol in skincare, Regular face wash.", "Carrots, Apricots, Tomatoes"),
        rec("Don't pop acne.", "Legumes, nuts, seeds."),
    ),
    (
        SkinCondition::Cellulitis,
        rec("Hand hygiene, wound care.", "Baked beans, whole grains."),
        rec(
            "Address conditions such as chronic edema (swelling), vascular disease.",
            "Broccoli and cabbage.",
        ),
    ),
    (
        SkinCondition::ColdSore,
        rec("skin contact with people, Don't share towels.", "milk, cheese."),
        rec("Keep the affected area clean, moisturized, and dry.", "juice,soup."),
    ),
    (
        SkinCondition::Dermatitis,
        rec("Use moisturizer, Wear protective clothing.", "wheat, oats, milk."),
        rec("Pat skin gently, focus.", "Broccoli and cauliflower."),
    ),
    (
        SkinCondition::DrySkin,
        rec(
            "Warm water for bathing, Sufficient cleanser application.",
            "egg yolk, spinach.",
        ),
        rec("Clean, dry skin regimen.", "Leafy Vegetables, Frozen Fruits."),
    ),
    (
        SkinCondition::Eczema,
        rec(
            "Monitor water temperature, Daily moisturize habit.",
            "Drink more water, Cooking with olive oil.",
        ),
        rec("Prevent rubbing, cover itching.", "Vegetable oils, Dry Fruits."),
    ),
    (
        SkinCondition::Hives,
        rec("Sun protection, loose clothing.", "bread,pasta."),
        rec("Choose lukewarm water.", "fish, chicken."),
    ),
    (
        SkinCondition::Lupus,
        rec("7 hours of sleep each night, avoid sunlight.", "eggs,pasta."),
        rec("Wear sunscreen, hats, clothing.", "whole-wheat bread and brown rice."),
    ),
    (
        SkinCondition::Psoriasis,
        rec("Trim nails, avoid scratching.", "meat,eggs."),
        rec("Gentle skincare, moisturize often.", "Whole grains, Olive oil."),
    ),
    (
        SkinCondition::Ringworm,
        rec(
            "Keep your skin clean and dry , Wear Airy Footwear.",
            "Drink plenty of water,brown rice.",
        ),
        rec("Avoid sharing items, Stay off moist surfaces.", "yogurt, kefir."),
    ),
];

/// Precaution and food advice per skin condition and diabetic status
#[derive(Debug, Clone)]
pub struct RecommendationTable {
    entries: HashMap<(SkinCondition, DiabeticStatus), Recommendation>,
}

impl RecommendationTable {
    /// Build the table from the embedded advice
    pub fn embedded() -> Self {
        let mut entries = HashMap::with_capacity(ENTRIES.len() * 2);
        for (condition, not_diabetic, diabetic) in ENTRIES {
            entries.insert((condition, DiabeticStatus::No), not_diabetic);
            entries.insert((condition, DiabeticStatus::Yes), diabetic);
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, condition: SkinCondition, status: DiabeticStatus) -> Option<&Recommendation> {
        self.entries.get(&(condition, status))
    }

    /// Look up by names as entered in a form or on the command line
    pub fn lookup(&self, disease: &str, status: &str) -> Result<&Recommendation> {
        let not_found = || DermaError::NotFound {
            disease: disease.to_string(),
            status: status.to_string(),
        };
        let condition = SkinCondition::from_name(disease).ok_or_else(not_found)?;
        let status = DiabeticStatus::from_name(status).ok_or_else(not_found)?;
        self.get(condition, status).ok_or_else(not_found)
    }
}

impl Default for RecommendationTable {
    fn default() -> Self {
        Self::embedded()
    }
}
