use iced::{
    Color, Element, Task,
    widget::{Column, text},
};

use crate::error::DermaError;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::{Upload, pick_image, report_view, upload_panel},
};
use crate::models::Outcome;
use crate::present::{self, Report};
use crate::session::classify_in_background;

#[derive(Debug, Clone, Default)]
pub struct ConditionScreen {
    upload: Option<Upload>,
    busy: bool,
    report: Option<Report>,
}

#[derive(Debug, Clone)]
pub enum ConditionMessage {
    PickImage,
    ImagePicked(Option<Upload>),
    Clear,
    Submit,
    Classified(Result<Outcome, DermaError>),
}

impl Screen for ConditionScreen {
    type Message = ConditionMessage;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        if !state.session.gate().is_open() {
            return Column::new()
                .spacing(20)
                .push(text("Get to Know the Skin Disease").size(32))
                .push(text(present::SCREENING_REQUIRED).color(Color::from_rgb(0.9, 0.6, 0.1)))
                .into();
        }

        let mut content = Column::new()
            .spacing(20)
            .push(text("Get to Know the Skin Disease").size(32))
            .push(text("Upload an image of skin, and get a disease classification."))
            .push(upload_panel(
                self.upload.as_ref(),
                self.busy,
                ScreenMessage::ScreenMessage(ConditionMessage::PickImage),
                ScreenMessage::ScreenMessage(ConditionMessage::Clear),
                ScreenMessage::ScreenMessage(ConditionMessage::Submit),
            ));

        if let Some(report) = &self.report {
            content = content.push(report_view(report));
        }

        content.into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ConditionMessage::PickImage => Task::perform(pick_image(), |upload| {
                ScreenMessage::ScreenMessage(ConditionMessage::ImagePicked(upload))
            }),
            ConditionMessage::ImagePicked(Some(upload)) => {
                self.upload = Some(upload);
                self.report = None;
                Task::none()
            }
            ConditionMessage::ImagePicked(None) => Task::none(),
            ConditionMessage::Clear => {
                self.upload = None;
                self.report = None;
                Task::none()
            }
            ConditionMessage::Submit => {
                if let Err(err) = state.session.ensure_screened() {
                    self.report = Some(present::error_report(&err));
                    return Task::none();
                }
                let Some(upload) = &self.upload else {
                    return Task::none();
                };
                self.busy = true;
                let flow = state.session.condition_flow().clone();
                Task::perform(classify_in_background(flow, upload.bytes.clone()), |result| {
                    ScreenMessage::ScreenMessage(ConditionMessage::Classified(result))
                })
            }
            ConditionMessage::Classified(result) => {
                self.busy = false;
                self.report = Some(match &result {
                    Ok(outcome) => present::outcome_report(outcome),
                    Err(err) => present::error_report(err),
                });
                Task::none()
            }
        }
    }
}
