use iced::widget::{button, column, pick_list, row, slider, text, Space};
use iced::{Element, Length};

use crate::app::{scaled, Message};
use crate::settings::{Appearance, Settings};

pub fn view(settings: &Settings) -> Element<'_, Message> {
    let fs = settings.font_scale;

    let appearance_row = row![
        text("Appearance").size(scaled(13.0, fs)).width(Length::Fill),
        pick_list(
            Appearance::ALL,
            Some(settings.appearance),
            Message::AppearanceChanged
        )
        .text_size(scaled(13.0, fs)),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let font_row = row![
        text(format!("Font scale: {:.2}", settings.font_scale))
            .size(scaled(13.0, fs))
            .width(Length::Fill),
        slider(0.8..=1.4, settings.font_scale, Message::FontScaleChanged)
            .step(0.05)
            .width(200),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let poll_row = row![
        text(format!(
            "Status poll interval: {}s",
            settings.poll_interval_secs
        ))
        .size(scaled(13.0, fs))
        .width(Length::Fill),
        slider(
            1..=30u32,
            settings.poll_interval_secs as u32,
            Message::PollIntervalChanged
        )
        .width(200),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let timeout_row = row![
        text(format!(
            "Transcription timeout: {} min",
            settings.timeout_secs / 60
        ))
        .size(scaled(13.0, fs))
        .width(Length::Fill),
        slider(
            1..=60u32,
            (settings.timeout_secs / 60) as u32,
            Message::TimeoutMinutesChanged
        )
        .width(200),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    column![
        text("Settings").size(scaled(15.0, fs)),
        Space::new().height(4),
        appearance_row,
        font_row,
        poll_row,
        timeout_row,
        Space::new().height(8),
        button(text("Restore Defaults").size(scaled(13.0, fs)))
            .on_press(Message::RestoreDefaults)
            .padding([6, 14]),
    ]
    .spacing(14)
    .into()
}
