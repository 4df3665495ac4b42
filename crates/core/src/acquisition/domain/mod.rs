pub mod audio_converter;
pub mod audio_downloader;
pub mod audio_source;
pub mod error;
pub mod link_checker;
pub mod youtube;
