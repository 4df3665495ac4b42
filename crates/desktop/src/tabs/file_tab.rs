use iced::widget::{button, column, row, text, text_input, Space};
use iced::{Element, Length};

use crate::app::{scaled, App, Message, ProcessingState};
use crate::tabs::run_panel;

pub fn view(app: &App) -> Element<'_, Message> {
    let fs = app.settings.font_scale;
    let running = app.is_running();

    let key_input = text_input("AssemblyAI API key", &app.api_key)
        .on_input(Message::ApiKeyChanged)
        .secure(true)
        .padding(8)
        .size(scaled(13.0, fs));

    let path_label = app
        .input_path
        .as_deref()
        .and_then(|p| p.to_str())
        .unwrap_or("No file selected");
    let file_row = row![
        text(path_label)
            .size(scaled(13.0, fs))
            .width(Length::Fill),
        button(text("Browse...").size(scaled(13.0, fs)))
            .on_press(Message::SelectInput)
            .padding([6, 14]),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

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
        if app.input_path.is_some() && !matches!(app.processing, ProcessingState::Running(_)) {
            start = start.on_press(Message::StartFileRun);
        }
        start.into()
    };

    column![
        text("Transcribe a local audio file").size(scaled(15.0, fs)),
        Space::new().height(4),
        key_input,
        file_row,
        action,
        Space::new().height(8),
        run_panel::view(&app.processing, &app.results, fs),
    ]
    .spacing(12)
    .into()
}
