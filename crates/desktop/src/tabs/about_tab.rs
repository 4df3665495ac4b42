use iced::widget::{button, column, text, Space};
use iced::Element;

use crate::app::{scaled, Message};

const ASSEMBLYAI_URL: &str = "https://www.assemblyai.com/";

pub fn view(fs: f32) -> Element<'static, Message> {
    column![
        text("SpeechCount").size(scaled(18.0, fs)),
        text(format!("Version {}", env!("CARGO_PKG_VERSION"))).size(scaled(12.0, fs)),
        Space::new().height(8),
        text("Transcribes speech from an audio file or a YouTube video and counts how often each word occurs.")
            .size(scaled(13.0, fs)),
        text("Transcription runs in the cloud via AssemblyAI; an API key is required.")
            .size(scaled(13.0, fs)),
        Space::new().height(8),
        button(text("assemblyai.com").size(scaled(13.0, fs)))
            .on_press(Message::OpenLink(ASSEMBLYAI_URL.to_string()))
            .style(button::text)
            .padding([4, 8]),
    ]
    .spacing(8)
    .into()
}
