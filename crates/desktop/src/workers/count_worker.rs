use std::time::Duration;

use speechcount_core::acquisition::domain::audio_source::AudioSource;
use speechcount_core::acquisition::infrastructure::ffmpeg_converter::FfmpegConverter;
use speechcount_core::acquisition::infrastructure::oembed_checker::OembedChecker;
use speechcount_core::acquisition::infrastructure::ytdlp_downloader::YtDlpDownloader;
use speechcount_core::acquisition::resolve_use_case::ResolveAudioUseCase;
use speechcount_core::pipeline::count_words_use_case::CountWordsUseCase;
use speechcount_core::pipeline::error::PipelineError;
use speechcount_core::pipeline::infrastructure::task_runner::{RunningTask, TaskRunner};
use speechcount_core::shared::api_key::ApiKey;
use speechcount_core::shared::clock::SystemClock;
use speechcount_core::shared::retry::RetryPolicy;
use speechcount_core::transcription::domain::poller::JobPoller;
use speechcount_core::transcription::infrastructure::assemblyai_client::AssemblyAiClient;

/// Parameters for one transcribe-and-count run.
pub struct CountParams {
    pub source: AudioSource,
    pub api_key: ApiKey,
    pub poll_interval: Duration,
    pub timeout: Duration,
}

/// Start a pipeline run on the shared task slot. Fails with
/// `AlreadyRunning` while a previous run is still active.
pub fn spawn(runner: &TaskRunner, params: CountParams) -> Result<RunningTask, PipelineError> {
    runner.spawn(Box::new(move |progress, cancelled| {
        let resolver = ResolveAudioUseCase::new(
            Box::new(OembedChecker::new()),
            Box::new(YtDlpDownloader::new()),
            Box::new(FfmpegConverter::new()),
        );
        let poller = JobPoller {
            poll_interval: params.poll_interval,
            timeout: params.timeout,
            retry: RetryPolicy::default(),
        };

        let use_case = CountWordsUseCase::new(
            resolver,
            Box::new(AssemblyAiClient::new(params.api_key)),
            poller,
            Box::new(SystemClock),
            Some(Box::new(move |stage| progress(stage))),
            Some(cancelled),
        );
        use_case.execute(&params.source)
    }))
}
