use iced::{
    Element, Task,
    widget::{Column, button, pick_list, text},
};

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::report_view,
};
use crate::present::{self, Report};
use crate::recommendations::{DiabeticStatus, SkinCondition};

#[derive(Debug, Clone)]
pub struct RecommendationsScreen {
    disease: SkinCondition,
    status: DiabeticStatus,
    report: Option<Report>,
}

impl Default for RecommendationsScreen {
    fn default() -> Self {
        Self {
            disease: SkinCondition::Acne,
            status: DiabeticStatus::Yes,
            report: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RecommendationsMessage {
    DiseaseSelected(SkinCondition),
    StatusSelected(DiabeticStatus),
    Submit,
}

impl Screen for RecommendationsScreen {
    type Message = RecommendationsMessage;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let mut content = Column::new()
            .spacing(20)
            .push(text("Skin Health Recommendations").size(32))
            .push(text("Select Skin Disease"))
            .push(pick_list(SkinCondition::ALL, Some(self.disease), |disease| {
                ScreenMessage::ScreenMessage(RecommendationsMessage::DiseaseSelected(disease))
            }))
            .push(text("Are you diabetic?"))
            .push(pick_list(DiabeticStatus::ALL, Some(self.status), |status| {
                ScreenMessage::ScreenMessage(RecommendationsMessage::StatusSelected(status))
            }))
            .push(
                button("Get Recommendations")
                    .on_press(ScreenMessage::ScreenMessage(RecommendationsMessage::Submit)),
            );

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
            RecommendationsMessage::DiseaseSelected(disease) => {
                self.disease = disease;
                self.report = None;
            }
            RecommendationsMessage::StatusSelected(status) => {
                self.status = status;
                self.report = None;
            }
            RecommendationsMessage::Submit => {
                let result = state.recommendations.lookup(
                    self.disease.display_name(),
                    &self.status.to_string(),
                );
                self.report = Some(present::recommendation_report(&result));
            }
        }
        Task::none()
    }
}
