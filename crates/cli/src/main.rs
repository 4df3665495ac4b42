use std::process;
use std::time::Duration;

use clap::Parser;

use speechcount_core::acquisition::domain::audio_source::AudioSource;
use speechcount_core::acquisition::infrastructure::ffmpeg_converter::FfmpegConverter;
use speechcount_core::acquisition::infrastructure::oembed_checker::OembedChecker;
use speechcount_core::acquisition::infrastructure::ytdlp_downloader::YtDlpDownloader;
use speechcount_core::acquisition::resolve_use_case::ResolveAudioUseCase;
use speechcount_core::pipeline::count_words_use_case::CountWordsUseCase;
use speechcount_core::pipeline::error::PipelineError;
use speechcount_core::shared::api_key::ApiKey;
use speechcount_core::shared::clock::SystemClock;
use speechcount_core::shared::constants::{DEFAULT_JOB_TIMEOUT, DEFAULT_POLL_INTERVAL};
use speechcount_core::shared::retry::RetryPolicy;
use speechcount_core::transcription::domain::poller::JobPoller;
use speechcount_core::transcription::infrastructure::assemblyai_client::AssemblyAiClient;

/// Transcribe audio (local file or YouTube link) and print a ranked
/// word-frequency table.
#[derive(Parser)]
#[command(name = "speechcount")]
struct Cli {
    /// Audio file path or YouTube video URL.
    input: String,

    /// AssemblyAI API key (defaults to $ASSEMBLYAI_API_KEY).
    #[arg(long, env = "ASSEMBLYAI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Only print the N most frequent words.
    #[arg(long)]
    top: Option<usize>,

    /// Seconds between job status polls.
    #[arg(
        long,
        default_value_t = DEFAULT_POLL_INTERVAL.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    poll_interval_secs: u64,

    /// Give up if the job has no terminal status after this many seconds.
    #[arg(long, default_value_t = DEFAULT_JOB_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Print the table as JSON instead of aligned text.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error ({}): {e}", e.kind());
        process::exit(1);
    }
}

fn run() -> Result<(), PipelineError> {
    let cli = Cli::parse();

    let source = AudioSource::parse(&cli.input)?;
    let api_key = ApiKey::new(cli.api_key);
    if api_key.is_empty() {
        return Err(PipelineError::Auth);
    }

    let resolver = ResolveAudioUseCase::new(
        Box::new(OembedChecker::new()),
        Box::new(YtDlpDownloader::new()),
        Box::new(FfmpegConverter::new()),
    );
    let poller = JobPoller {
        poll_interval: Duration::from_secs(cli.poll_interval_secs),
        timeout: Duration::from_secs(cli.timeout_secs),
        retry: RetryPolicy::default(),
    };
    let use_case = CountWordsUseCase::new(
        resolver,
        Box::new(AssemblyAiClient::new(api_key)),
        poller,
        Box::new(SystemClock),
        Some(Box::new(|stage| eprintln!("{stage}..."))),
        None,
    );

    let table = use_case.execute(&source)?;
    let mut ranked = table.ranked();
    if let Some(top) = cli.top {
        ranked.truncate(top);
    }

    if cli.json {
        let entries: Vec<serde_json::Value> = ranked
            .iter()
            .map(|(word, count)| serde_json::json!({ "word": word, "count": count }))
            .collect();
        println!("{}", serde_json::Value::Array(entries));
    } else if ranked.is_empty() {
        println!("(no words in transcript)");
    } else {
        let width = ranked.iter().map(|(w, _)| w.len()).max().unwrap_or(0);
        for (word, count) in &ranked {
            println!("{word:<width$}  {count}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_poll_interval_rejected() {
        let result = Cli::try_parse_from([
            "speechcount",
            "input.mp3",
            "--api-key",
            "k",
            "--poll-interval-secs",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_positive_poll_interval_accepted() {
        let cli = Cli::try_parse_from([
            "speechcount",
            "input.mp3",
            "--api-key",
            "k",
            "--poll-interval-secs",
            "1",
        ])
        .unwrap();
        assert_eq!(cli.poll_interval_secs, 1);
    }
}
