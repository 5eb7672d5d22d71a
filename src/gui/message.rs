use crate::gui::{
    screens::{
        ScreenMessage, condition::ConditionScreen, diabetes::DiabetesScreen,
        recommendations::RecommendationsScreen, screening::ScreeningScreen,
    },
    widgets::Panel,
};

#[derive(Debug, Clone)]
pub enum Message {
    Screening(ScreenMessage<ScreeningScreen>),
    Condition(ScreenMessage<ConditionScreen>),
    Diabetes(ScreenMessage<DiabetesScreen>),
    Recommendations(ScreenMessage<RecommendationsScreen>),
    ChangeScreen(Panel),
}
