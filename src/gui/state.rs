use crate::{Artifacts, DiabetesPredictor, RecommendationTable, Session};

/// State shared by all panels of one window (one window = one session)
#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    pub diabetes: DiabetesPredictor,
    pub recommendations: RecommendationTable,
}

impl AppState {
    pub fn new(artifacts: &Artifacts) -> Self {
        Self {
            session: artifacts.new_session(),
            diabetes: artifacts.diabetes_predictor(),
            recommendations: RecommendationTable::embedded(),
        }
    }
}
