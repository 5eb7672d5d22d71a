use iced::{
    Color, Element, Length, Theme,
    widget::{Column, button, column, container, row, text},
};
use std::fmt;
use std::sync::Arc;

use crate::present::{Report, Tone};

/// Sidebar entries, one per mutually exclusive panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Panel {
    InitialScreening,
    SkinCondition,
    DiabetesPrediction,
    Recommendations,
}

impl Panel {
    pub const ALL: [Panel; 4] = [
        Panel::InitialScreening,
        Panel::SkinCondition,
        Panel::DiabetesPrediction,
        Panel::Recommendations,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Panel::InitialScreening => "Initial Screening",
            Panel::SkinCondition => "Get to Know the Skin Disease",
            Panel::DiabetesPrediction => "Diabetes Prediction",
            Panel::Recommendations => "Skin Health Recommendations",
        }
    }
}

/// An image chosen in the file dialog
#[derive(Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Arc<Vec<u8>>,
    pub preview: iced::widget::image::Handle,
}

impl Upload {
    pub fn new(name: String, bytes: Vec<u8>) -> Self {
        let preview = iced::widget::image::Handle::from_bytes(bytes.clone());
        Self {
            name,
            bytes: Arc::new(bytes),
            preview,
        }
    }
}

impl fmt::Debug for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upload")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Ask the user for a JPEG/PNG file and read it
pub async fn pick_image() -> Option<Upload> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Upload Image")
        .add_filter("Image", &["jpg", "jpeg", "png"])
        .pick_file()
        .await?;
    let bytes = handle.read().await;
    Some(Upload::new(handle.file_name(), bytes))
}

/// Upload button, preview, and Clear / Submit actions
pub fn upload_panel<'a, Message: Clone + 'a>(
    upload: Option<&'a Upload>,
    busy: bool,
    on_pick: Message,
    on_clear: Message,
    on_submit: Message,
) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(10)
        .push(button("Upload Image").on_press(on_pick));

    if let Some(upload) = upload {
        let submit_label = if busy { "Classifying..." } else { "Submit" };
        content = content
            .push(iced::widget::image(upload.preview.clone()).width(Length::Fixed(300.0)))
            .push(text(upload.name.as_str()).size(14))
            .push(
                row![
                    button("Clear").on_press(on_clear),
                    button(submit_label).on_press_maybe((!busy).then_some(on_submit)),
                ]
                .spacing(20),
            );
    }

    content.into()
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Info => None,
        Tone::Success => Some(Color::from_rgb(0.2, 0.7, 0.3)),
        Tone::Warning => Some(Color::from_rgb(0.9, 0.6, 0.1)),
        Tone::Danger => Some(Color::from_rgb(0.85, 0.2, 0.2)),
    }
}

pub fn report_view<'a, Message: 'a>(report: &'a Report) -> Element<'a, Message> {
    let color = tone_color(report.tone);
    let mut lines = Column::new().spacing(6);
    for line in &report.lines {
        let mut line_text = text(line.as_str());
        if let Some(color) = color {
            line_text = line_text.color(color);
        }
        lines = lines.push(line_text);
    }
    container(lines)
        .padding(10)
        .style(container::bordered_box)
        .into()
}

pub fn layout<'a, Message>(
    active: Panel,
    screened: bool,
    on_select: impl Fn(Panel) -> Message,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mut nav = Column::new()
        .spacing(10)
        .padding(10)
        .push(text("AUTOMATED DERMATOLOGICAL CONDITION IDENTIFICATION SYSTEM").size(16));

    for panel in Panel::ALL {
        let style: fn(&Theme, button::Status) -> button::Style = if panel == active {
            button::primary
        } else {
            button::secondary
        };
        let label = if panel == Panel::SkinCondition && !screened {
            format!("{} (locked)", panel.title())
        } else {
            panel.title().to_string()
        };
        nav = nav.push(
            button(text(label))
                .width(Length::Fill)
                .style(style)
                .on_press(on_select(panel)),
        );
    }

    container(row![
        container(column![nav])
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .style(container::bordered_box),
        container(main_content.into())
            .width(Length::FillPortion(4))
            .padding(20),
    ])
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
