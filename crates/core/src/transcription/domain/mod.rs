pub mod job;
pub mod poller;
pub mod transcript_api;
