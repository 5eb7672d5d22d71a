use iced::{
    Element, Task,
    widget::{Column, Row, button, text, text_input},
};

use crate::diabetes::FIELD_LABELS;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::report_view,
};
use crate::present::{self, Report};

const COLUMNS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct DiabetesScreen {
    fields: [String; 8],
    report: Option<Report>,
}

#[derive(Debug, Clone)]
pub enum DiabetesMessage {
    FieldChanged(usize, String),
    Submit,
}

impl Screen for DiabetesScreen {
    type Message = DiabetesMessage;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let mut grid = Column::new().spacing(15);
        let indices: Vec<usize> = (0..FIELD_LABELS.len()).collect();
        for chunk in indices.chunks(COLUMNS) {
            let mut row = Row::new().spacing(20);
            for &i in chunk {
                row = row.push(
                    Column::new()
                        .spacing(5)
                        .push(text(FIELD_LABELS[i]).size(14))
                        .push(
                            text_input("", &self.fields[i]).on_input(move |value| {
                                ScreenMessage::ScreenMessage(DiabetesMessage::FieldChanged(
                                    i, value,
                                ))
                            }),
                        ),
                );
            }
            grid = grid.push(row);
        }

        let mut content = Column::new()
            .spacing(20)
            .push(text("Diabetes Prediction").size(32))
            .push(grid)
            .push(
                button("Diabetes Test Result")
                    .on_press(ScreenMessage::ScreenMessage(DiabetesMessage::Submit)),
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
            DiabetesMessage::FieldChanged(i, value) => {
                if let Some(field) = self.fields.get_mut(i) {
                    *field = value;
                }
            }
            DiabetesMessage::Submit => {
                self.report = Some(match state.diabetes.assess(&self.fields) {
                    Ok(diagnosis) => present::diagnosis_report(diagnosis),
                    Err(err) => {
                        log::warn!("Diabetes form rejected: {}", err);
                        present::error_report(&err)
                    }
                });
            }
        }
        Task::none()
    }
}
