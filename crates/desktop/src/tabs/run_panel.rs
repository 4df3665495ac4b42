use iced::widget::{column, row, text, Space};
use iced::{Element, Length};

use crate::app::{scaled, Message, ProcessingState};

/// Status line plus the ranked word table, shared by the file and YouTube
/// tabs.
pub fn view<'a>(
    processing: &'a ProcessingState,
    results: &'a [(String, u64)],
    fs: f32,
) -> Element<'a, Message> {
    let status: Element<'_, Message> = match processing {
        ProcessingState::Idle => text("").size(scaled(13.0, fs)).into(),
        ProcessingState::Running(stage) => {
            text(format!("{stage}...")).size(scaled(13.0, fs)).into()
        }
        ProcessingState::Complete => text("Done.")
            .size(scaled(13.0, fs))
            .style(text::success)
            .into(),
        ProcessingState::Cancelled => text("Cancelled.")
            .size(scaled(13.0, fs))
            .style(text::secondary)
            .into(),
        ProcessingState::Error { kind, message } => text(format!("Error ({kind}): {message}"))
            .size(scaled(13.0, fs))
            .style(text::danger)
            .into(),
    };

    let mut panel = column![status].spacing(8);

    if !results.is_empty() {
        let total: u64 = results.iter().map(|(_, n)| n).sum();
        panel = panel.push(
            text(format!(
                "{} words, {} distinct",
                total,
                results.len()
            ))
            .size(scaled(12.0, fs))
            .style(text::secondary),
        );
        panel = panel.push(Space::new().height(4));

        let header = row![
            text("Word").size(scaled(12.0, fs)).width(Length::Fill),
            text("Count").size(scaled(12.0, fs)),
        ]
        .spacing(12);
        panel = panel.push(header);

        for (word, count) in results {
            panel = panel.push(
                row![
                    text(word.as_str())
                        .size(scaled(13.0, fs))
                        .width(Length::Fill),
                    text(count.to_string()).size(scaled(13.0, fs)),
                ]
                .spacing(12),
            );
        }
    }

    panel.into()
}
