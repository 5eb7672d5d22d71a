use iced::{Element, Task};

use super::screens::screening::{ScreeningMessage, ScreeningParentMessage};
use super::screens::{Screen, ScreenData, ScreenMessage};
use super::widgets::{Panel, layout};
use super::{AppState, Message};
use crate::Artifacts;

pub struct DermascanApp {
    screen: ScreenData,
    state: AppState,
}

impl DermascanApp {
    pub fn new(artifacts: Artifacts) -> Self {
        Self {
            screen: ScreenData::open(Panel::InitialScreening),
            state: AppState::new(&artifacts),
        }
    }

    pub fn title(&self) -> String {
        "Dermascan - Automated Dermatological Condition Identification".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ChangeScreen(panel) => {
                if self.screen.panel() != panel {
                    self.screen = ScreenData::open(panel);
                }
                Task::none()
            }
            // Screening results update the gate even if the user moved on
            Message::Screening(ScreenMessage::ParentMessage(parent)) => match parent {
                ScreeningParentMessage::Screened(result) => {
                    let result = self.state.session.record_screening(result);
                    match &mut self.screen {
                        ScreenData::Screening(screen) => screen
                            .update(ScreeningMessage::ShowResult(result), &mut self.state)
                            .map(Message::Screening),
                        _ => Task::none(),
                    }
                }
                ScreeningParentMessage::Continue => {
                    self.update(Message::ChangeScreen(Panel::SkinCondition))
                }
            },
            message => self.screen.update(message, &mut self.state),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        layout(
            self.screen.panel(),
            self.state.session.gate().is_open(),
            Message::ChangeScreen,
            self.screen.view(&self.state),
        )
    }
}
