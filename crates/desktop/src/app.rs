use std::path::PathBuf;
use std::time::Duration;

use crossbeam_channel::Receiver;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};

use speechcount_core::acquisition::domain::audio_source::AudioSource;
use speechcount_core::pipeline::infrastructure::task_runner::{
    RunnerMessage, RunningTask, TaskRunner,
};
use speechcount_core::pipeline::stage::Stage;
use speechcount_core::shared::api_key::ApiKey;
use speechcount_core::shared::constants::SUPPORTED_AUDIO_EXTENSIONS;

use crate::settings::{Appearance, Settings};
use crate::tabs;
use crate::theme;
use crate::workers::count_worker::{self, CountParams};
use crate::workers::url_check_worker::{self, UrlCheckMessage};

// ---------------------------------------------------------------------------
// Tab enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    File,
    YouTube,
    Settings,
    About,
}

impl Tab {
    const ALL: &[Tab] = &[Tab::File, Tab::YouTube, Tab::Settings, Tab::About];

    fn label(self) -> &'static str {
        match self {
            Tab::File => "Audio File",
            Tab::YouTube => "YouTube",
            Tab::Settings => "Settings",
            Tab::About => "About",
        }
    }
}

// ---------------------------------------------------------------------------
// Run state
// ---------------------------------------------------------------------------

/// What the status panel shows for the current/last pipeline run.
#[derive(Debug, Clone)]
pub enum ProcessingState {
    Idle,
    Running(Stage),
    Complete,
    Cancelled,
    Error { kind: &'static str, message: String },
}

/// Validation state of the YouTube URL field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlCheckState {
    Unchecked,
    Checking,
    Valid,
    Invalid(String),
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    ApiKeyChanged(String),
    SelectInput,
    InputSelected(Option<PathBuf>),
    YtUrlChanged(String),
    CheckUrl,
    StartFileRun,
    StartUrlRun,
    CancelRun,
    PollWorkers,
    AppearanceChanged(Appearance),
    FontScaleChanged(f32),
    PollIntervalChanged(u32),
    TimeoutMinutesChanged(u32),
    RestoreDefaults,
    OpenLink(String),
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    active_tab: Tab,
    pub settings: Settings,
    pub api_key: String,
    pub input_path: Option<PathBuf>,
    pub yt_url: String,
    pub url_check: UrlCheckState,
    url_check_rx: Option<Receiver<UrlCheckMessage>>,
    runner: TaskRunner,
    task: Option<RunningTask>,
    pub processing: ProcessingState,
    pub results: Vec<(String, u64)>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                active_tab: Tab::File,
                settings: Settings::load(),
                api_key: String::new(),
                input_path: None,
                yt_url: String::new(),
                url_check: UrlCheckState::Unchecked,
                url_check_rx: None,
                runner: TaskRunner::new(),
                task: None,
                processing: ProcessingState::Idle,
                results: Vec::new(),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::ApiKeyChanged(key) => {
                self.api_key = key;
            }
            Message::SelectInput => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Select audio file")
                            .add_filter("Audio Files", SUPPORTED_AUDIO_EXTENSIONS)
                            .add_filter("All Files", &["*"])
                            .pick_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::InputSelected,
                );
            }
            Message::InputSelected(Some(path)) => {
                self.input_path = Some(path);
                self.processing = ProcessingState::Idle;
                self.results.clear();
            }
            Message::InputSelected(None) => {}
            Message::YtUrlChanged(url) => {
                self.yt_url = url;
                self.url_check = UrlCheckState::Unchecked;
                // Abandon any in-flight check; its verdict is for the old
                // URL and must not enable Start for the new one.
                self.url_check_rx = None;
            }
            Message::CheckUrl => {
                if !self.yt_url.trim().is_empty() {
                    self.url_check = UrlCheckState::Checking;
                    self.url_check_rx = Some(url_check_worker::spawn(self.yt_url.clone()));
                }
            }
            Message::StartFileRun => {
                if let Some(path) = self.input_path.clone() {
                    self.start_run(AudioSource::from_path(path));
                }
            }
            Message::StartUrlRun => match AudioSource::from_url(&self.yt_url) {
                Ok(source) => self.start_run(source),
                Err(e) => {
                    self.processing = ProcessingState::Error {
                        kind: "invalid URL",
                        message: e.to_string(),
                    };
                }
            },
            Message::CancelRun => {
                if let Some(ref task) = self.task {
                    task.cancel();
                }
            }
            Message::PollWorkers => {
                self.drain_task_messages();
                self.drain_url_check();
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::FontScaleChanged(scale) => {
                self.settings.font_scale = scale;
                self.settings.save();
            }
            Message::PollIntervalChanged(secs) => {
                self.settings.poll_interval_secs = u64::from(secs.max(1));
                self.settings.save();
            }
            Message::TimeoutMinutesChanged(minutes) => {
                self.settings.timeout_secs = u64::from(minutes.max(1)) * 60;
                self.settings.save();
            }
            Message::RestoreDefaults => {
                self.settings = Settings::default();
                self.settings.save();
            }
            Message::OpenLink(url) => {
                if let Err(e) = open::that(&url) {
                    log::warn!("failed to open {url}: {e}");
                }
            }
        }
        Task::none()
    }

    fn start_run(&mut self, source: AudioSource) {
        let api_key = ApiKey::new(self.api_key.clone());
        if api_key.is_empty() {
            self.processing = ProcessingState::Error {
                kind: "authentication",
                message: "enter an AssemblyAI API key first".to_string(),
            };
            return;
        }

        let params = CountParams {
            source,
            api_key,
            poll_interval: Duration::from_secs(self.settings.poll_interval_secs),
            timeout: Duration::from_secs(self.settings.timeout_secs),
        };
        match count_worker::spawn(&self.runner, params) {
            Ok(task) => {
                self.task = Some(task);
                self.results.clear();
                self.processing = ProcessingState::Running(Stage::Acquiring);
            }
            Err(e) => {
                self.processing = ProcessingState::Error {
                    kind: e.kind(),
                    message: e.to_string(),
                };
            }
        }
    }

    fn drain_task_messages(&mut self) {
        let Some(ref task) = self.task else {
            return;
        };

        let mut terminal = false;
        while let Ok(message) = task.receiver.try_recv() {
            match message {
                RunnerMessage::Stage(stage) => {
                    self.processing = ProcessingState::Running(stage);
                }
                RunnerMessage::Finished(table) => {
                    self.results = table.ranked();
                    self.processing = ProcessingState::Complete;
                    terminal = true;
                }
                RunnerMessage::Failed(e) => {
                    self.processing = ProcessingState::Error {
                        kind: e.kind(),
                        message: e.to_string(),
                    };
                    terminal = true;
                }
                RunnerMessage::Cancelled => {
                    self.processing = ProcessingState::Cancelled;
                    terminal = true;
                }
            }
        }
        if terminal {
            self.task = None;
        }
    }

    fn drain_url_check(&mut self) {
        let Some(ref rx) = self.url_check_rx else {
            return;
        };
        if let Ok(message) = rx.try_recv() {
            self.url_check = match message {
                UrlCheckMessage::Valid => UrlCheckState::Valid,
                UrlCheckMessage::Invalid(reason) => UrlCheckState::Invalid(reason),
            };
            self.url_check_rx = None;
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.settings.font_scale;

        let tab_bar = row(Tab::ALL
            .iter()
            .map(|&tab| {
                let label = text(tab.label()).size(scaled(13.0, fs));
                let btn = button(label)
                    .on_press(Message::TabSelected(tab))
                    .padding([6, 14]);
                if tab == self.active_tab {
                    btn.style(button::primary).into()
                } else {
                    btn.style(button::text).into()
                }
            })
            .collect::<Vec<_>>())
        .spacing(2);

        let content: Element<'_, Message> = match self.active_tab {
            Tab::File => tabs::file_tab::view(self),
            Tab::YouTube => tabs::youtube_tab::view(self),
            Tab::Settings => tabs::settings_tab::view(&self.settings),
            Tab::About => tabs::about_tab::view(fs),
        };

        let tab_content = container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill);

        column![tab_bar, tab_content]
            .spacing(0)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.task.is_some() || self.url_check_rx.is_some() {
            iced::time::every(Duration::from_millis(100)).map(|_| Message::PollWorkers)
        } else if self.settings.appearance == Appearance::System {
            // Redraw occasionally so a system theme flip is picked up.
            iced::time::every(Duration::from_secs(2)).map(|_| Message::PollWorkers)
        } else {
            Subscription::none()
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }
}

/// Scale a base font size by the user's font_scale setting.
pub fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}
