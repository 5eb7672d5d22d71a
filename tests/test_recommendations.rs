mod common;

use common::*;
use dermascan::{CONDITION_LABELS, DiabeticStatus, RecommendationTable, SkinCondition};

#[test]
fn test_acne_entries() {
    let table = RecommendationTable::embedded();

    let rec = table.lookup("Acne", "No").expect("lookup failed");
    assert_eq!(rec.precaution, "Avoid alcohol in skincare, Regular face wash.");
    assert_eq!(rec.food, "Carrots, Apricots, Tomatoes");

    let rec = table.lookup("Acne", "Yes").expect("lookup failed");
    assert_eq!(rec.precaution, "Don't pop acne.");
    assert_eq!(rec.food, "Legumes, nuts, seeds.");
}

#[test]
fn test_table_is_complete() {
    let table = RecommendationTable::default();
    assert_eq!(table.len(), 20);

    for condition in SkinCondition::ALL {
        for status in DiabeticStatus::ALL {
            assert!(
                table.get(condition, status).is_some(),
                "missing entry for {} / {}",
                condition,
                status
            );
        }
    }
}

#[test]
fn test_lookup_is_case_insensitive() {
    let table = RecommendationTable::embedded();
    let expected = table.get(SkinCondition::DrySkin, DiabeticStatus::Yes);

    assert_eq!(table.lookup("dry skin", "yes").ok(), expected);
    assert_eq!(table.lookup("  DRY SKIN ", "YES").ok(), expected);
}

#[test]
fn test_condition_labels_map_to_table() {
    // Every label the condition model can report has advice
    for label in CONDITION_LABELS.labels() {
        let condition = SkinCondition::from_name(label);
        assert!(condition.is_some(), "no condition for label {}", label);
    }
}

#[test]
fn test_unknown_disease_is_not_found() {
    let table = RecommendationTable::embedded();
    assert_eq!(
        table.lookup("Measles", "No"),
        Err(DermaError::NotFound {
            disease: "Measles".to_string(),
            status: "No".to_string(),
        })
    );
    assert!(matches!(
        table.lookup("Acne", "Maybe"),
        Err(DermaError::NotFound { .. })
    ));
}

#[test]
fn test_condition_parsing() {
    assert_eq!("cold sore".parse::<SkinCondition>(), Ok(SkinCondition::ColdSore));
    assert!("frostbite".parse::<SkinCondition>().is_err());
    assert_eq!(DiabeticStatus::from(true), DiabeticStatus::Yes);
    assert_eq!(DiabeticStatus::No.to_string(), "No");
}
