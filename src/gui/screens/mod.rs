pub mod condition;
pub mod diabetes;
pub mod recommendations;
pub mod screening;

use iced::{Element, Task};

use crate::gui::{AppState, Message, widgets::Panel};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized + Clone {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// The panel currently shown in the main area
#[derive(Debug, Clone)]
pub enum ScreenData {
    Screening(screening::ScreeningScreen),
    Condition(condition::ConditionScreen),
    Diabetes(diabetes::DiabetesScreen),
    Recommendations(recommendations::RecommendationsScreen),
}

impl ScreenData {
    /// Fresh screen for a sidebar entry
    pub fn open(panel: Panel) -> Self {
        match panel {
            Panel::InitialScreening => ScreenData::Screening(Default::default()),
            Panel::SkinCondition => ScreenData::Condition(Default::default()),
            Panel::DiabetesPrediction => ScreenData::Diabetes(Default::default()),
            Panel::Recommendations => ScreenData::Recommendations(Default::default()),
        }
    }

    pub fn panel(&self) -> Panel {
        match self {
            ScreenData::Screening(_) => Panel::InitialScreening,
            ScreenData::Condition(_) => Panel::SkinCondition,
            ScreenData::Diabetes(_) => Panel::DiabetesPrediction,
            ScreenData::Recommendations(_) => Panel::Recommendations,
        }
    }

    pub fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, Message> {
        match self {
            ScreenData::Screening(screen) => screen.view(state).map(Message::Screening),
            ScreenData::Condition(screen) => screen.view(state).map(Message::Condition),
            ScreenData::Diabetes(screen) => screen.view(state).map(Message::Diabetes),
            ScreenData::Recommendations(screen) => {
                screen.view(state).map(Message::Recommendations)
            }
        }
    }

    /// Route a message to the active screen; messages for other screens
    /// (e.g. results that arrive after a panel switch) are dropped
    pub fn update(&mut self, message: Message, state: &mut AppState) -> Task<Message> {
        match (self, message) {
            (ScreenData::Screening(page), Message::Screening(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state).map(Message::Screening)
            }
            (ScreenData::Condition(page), Message::Condition(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state).map(Message::Condition)
            }
            (ScreenData::Diabetes(page), Message::Diabetes(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state).map(Message::Diabetes)
            }
            (
                ScreenData::Recommendations(page),
                Message::Recommendations(ScreenMessage::ScreenMessage(msg)),
            ) => page.update(msg, state).map(Message::Recommendations),
            _ => Task::none(),
        }
    }
}
