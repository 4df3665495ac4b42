//! Core library for SpeechCount: resolves an audio source (local file or
//! YouTube link), drives a cloud transcription job to completion, and tallies
//! word frequencies from the transcript.
//!
//! Front-ends (CLI, desktop GUI) live in sibling crates and only wire these
//! pieces together.

pub mod acquisition;
pub mod pipeline;
pub mod shared;
pub mod text;
pub mod transcription;
