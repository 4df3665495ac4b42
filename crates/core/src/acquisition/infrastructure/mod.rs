pub mod ffmpeg_converter;
pub mod oembed_checker;
pub mod ytdlp_downloader;
