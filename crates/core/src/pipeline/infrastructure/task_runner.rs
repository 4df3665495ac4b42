use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::Receiver;

use crate::pipeline::error::PipelineError;
use crate::pipeline::stage::Stage;
use crate::text::domain::word_counter::WordFrequencyTable;

/// Messages a running pipeline sends back to the interactive context.
/// Exactly one terminal message (`Finished`, `Failed`, or `Cancelled`) is
/// delivered per run, and nothing follows it.
#[derive(Debug)]
pub enum RunnerMessage {
    Stage(Stage),
    Finished(WordFrequencyTable),
    Failed(PipelineError),
    Cancelled,
}

/// Run lifecycle as observed through `RunnerMessage`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunnerState {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl RunnerState {
    pub fn apply(self, message: &RunnerMessage) -> Self {
        match message {
            RunnerMessage::Stage(_) => Self::Running,
            RunnerMessage::Finished(_) => Self::Succeeded,
            RunnerMessage::Failed(_) => Self::Failed,
            RunnerMessage::Cancelled => Self::Cancelled,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Cancelled)
    }
}

/// The pipeline body a runner executes: receives a progress callback and
/// the shared cancellation flag, returns the frequency table or the typed
/// failure.
pub type ProgressFn = Box<dyn Fn(Stage) + Send + Sync>;

pub type PipelineJob = Box<
    dyn FnOnce(ProgressFn, Arc<AtomicBool>) -> Result<WordFrequencyTable, PipelineError> + Send,
>;

/// Handle to one spawned run: the message receiver plus cooperative
/// cancellation. Cancellation is checked between stages and at every poll
/// iteration; in-flight network calls are abandoned, and any job already
/// submitted to the remote service is left there.
#[derive(Debug)]
pub struct RunningTask {
    pub receiver: Receiver<RunnerMessage>,
    cancel: Arc<AtomicBool>,
}

impl RunningTask {
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

/// One logical task slot executing pipeline runs off the interactive
/// thread. Only a single run may be active; starting another while one is
/// running is rejected rather than queued.
pub struct TaskRunner {
    active: Arc<AtomicBool>,
}

impl TaskRunner {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    pub fn spawn(&self, job: PipelineJob) -> Result<RunningTask, PipelineError> {
        if self.active.swap(true, Ordering::SeqCst) {
            return Err(PipelineError::AlreadyRunning);
        }

        let (tx, rx) = crossbeam_channel::unbounded::<RunnerMessage>();
        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_flag = cancel.clone();
        let active = self.active.clone();

        thread::spawn(move || {
            let progress_tx = tx.clone();
            let progress: ProgressFn = Box::new(move |stage: Stage| {
                let _ = progress_tx.send(RunnerMessage::Stage(stage));
            });

            let result = job(progress, cancel_flag.clone());
            let terminal = match result {
                Ok(table) => RunnerMessage::Finished(table),
                Err(PipelineError::Cancelled) => RunnerMessage::Cancelled,
                Err(e) if cancel_flag.load(Ordering::Relaxed) => {
                    // A stage may fail with an abandoned-call error after
                    // the flag was set; report that as cancellation.
                    log::debug!("run failed after cancellation: {e}");
                    RunnerMessage::Cancelled
                }
                Err(e) => RunnerMessage::Failed(e),
            };
            let _ = tx.send(terminal);
            active.store(false, Ordering::SeqCst);
        });

        Ok(RunningTask {
            receiver: rx,
            cancel,
        })
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}
