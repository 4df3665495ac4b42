pub mod about_tab;
pub mod file_tab;
pub mod run_panel;
pub mod settings_tab;
pub mod youtube_tab;
