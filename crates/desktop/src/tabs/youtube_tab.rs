use iced::widget::{button, column, row, text, text_input, Space};
use iced::{Element, Length};

use crate::app::{scaled, App, Message, UrlCheckState};
use crate::tabs::run_panel;

pub fn view(app: &App) -> Element<'_, Message> {
    let fs = app.settings.font_scale;
    let running = app.is_running();

    let key_input = text_input("AssemblyAI API key", &app.api_key)
        .on_input(Message::ApiKeyChanged)
        .secure(true)
        .padding(8)
        .size(scaled(13.0, fs));

    let url_input = text_input("https://www.youtube.com/watch?v=...", &app.yt_url)
        .on_input(Message::YtUrlChanged)
        .on_submit(Message::CheckUrl)
        .padding(8)
        .size(scaled(13.0, fs));

    let check_button = {
        let mut btn = button(text("Check").size(scaled(13.0, fs))).padding([6, 14]);
        if !app.yt_url.trim().is_empty() && app.url_check != UrlCheckState::Checking {
            btn = btn.on_press(Message::CheckUrl);
        }
        btn
    };

    let url_row = row![url_input.width(Length::Fill), check_button]
        .spacing(12)
        .align_y(iced::Alignment::Center);

    let check_status: Element<'_, Message> = match &app.url_check {
        UrlCheckState::Unchecked => text("").size(scaled(12.0, fs)).into(),
        UrlCheckState::Checking => text("Checking link...")
            .size(scaled(12.0, fs))
            .style(text::secondary)
            .into(),
        UrlCheckState::Valid => text("Video found.")
            .size(scaled(12.0, fs))
            .style(text::success)
            .into(),
        UrlCheckState::Invalid(reason) => text(reason.as_str())
            .size(scaled(12.0, fs))
            .style(text::danger)
            .into(),
    };

    let action: Element<'_, Message> = if running {
        button(text("Cancel").size(scaled(13.0, fs)))
            .on_press(Message::CancelRun)
            .style(button::danger)
            .padding([6, 18])
            .into()
    } else {
        let mut start = button(text("Count Words").size(scaled(13.0, fs)))
            .style(button::primary)
            .padding([6, 18]);
        if app.url_check == UrlCheckState::Valid {
            start = start.on_press(Message::StartUrlRun);
        }
        start.into()
    };

    column![
        text("Transcribe a YouTube video").size(scaled(15.0, fs)),
        Space::new().height(4),
        key_input,
        url_row,
        check_status,
        action,
        Space::new().height(8),
        run_panel::view(&app.processing, &app.results, fs),
    ]
    .spacing(12)
    .into()
}
