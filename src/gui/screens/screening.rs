use iced::{
    Element, Task,
    widget::{Column, button, text},
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
pub struct ScreeningScreen {
    upload: Option<Upload>,
    busy: bool,
    report: Option<Report>,
}

#[derive(Debug, Clone)]
pub enum ScreeningMessage {
    PickImage,
    ImagePicked(Option<Upload>),
    Clear,
    Submit,
    ShowResult(Result<Outcome, DermaError>),
}

#[derive(Debug, Clone)]
pub enum ScreeningParentMessage {
    /// Raw flow result; the app records it in the session gate
    Screened(Result<Outcome, DermaError>),
    Continue,
}

impl Screen for ScreeningScreen {
    type Message = ScreeningMessage;
    type ParentMessage = ScreeningParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let mut content = Column::new()
            .spacing(20)
            .push(text("Initial Screening Page").size(32))
            .push(text("Upload an image of skin, and get a disease classification."))
            .push(upload_panel(
                self.upload.as_ref(),
                self.busy,
                ScreenMessage::ScreenMessage(ScreeningMessage::PickImage),
                ScreenMessage::ScreenMessage(ScreeningMessage::Clear),
                ScreenMessage::ScreenMessage(ScreeningMessage::Submit),
            ));

        if let Some(report) = &self.report {
            content = content.push(report_view(report));
            if state.session.gate().is_open() {
                content = content.push(
                    button("Get to Know the Skin Disease")
                        .on_press(ScreenMessage::ParentMessage(ScreeningParentMessage::Continue)),
                );
            }
        }

        content.into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ScreeningMessage::PickImage => Task::perform(pick_image(), |upload| {
                ScreenMessage::ScreenMessage(ScreeningMessage::ImagePicked(upload))
            }),
            ScreeningMessage::ImagePicked(Some(upload)) => {
                self.upload = Some(upload);
                self.report = None;
                Task::none()
            }
            ScreeningMessage::ImagePicked(None) => Task::none(),
            ScreeningMessage::Clear => {
                self.upload = None;
                self.report = None;
                Task::none()
            }
            ScreeningMessage::Submit => {
                let Some(upload) = &self.upload else {
                    return Task::none();
                };
                self.busy = true;
                let flow = state.session.screening_flow().clone();
                Task::perform(classify_in_background(flow, upload.bytes.clone()), |result| {
                    ScreenMessage::ParentMessage(ScreeningParentMessage::Screened(result))
                })
            }
            ScreeningMessage::ShowResult(result) => {
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
