use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::{info, LevelFilter};
use std::future::Future;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static MULTI: OnceLock<MultiProgress> = OnceLock::new();

pub fn init(log_level: LevelFilter) {
    let logger = env_logger::builder()
        .filter_level(log_level)
        .parse_default_env() // Allow overriding log level through RUST_LOG env var
        .build();

    let multi = MULTI.get_or_init(MultiProgress::new).clone();

    let wrapper = LogWrapper::new(multi, logger);
    if let Err(err) = wrapper.try_init() {
        eprintln!("Logging was already initialized: {}", err);
    }
}

fn spinner(task_desc: &str) -> ProgressBar {
    let style = ProgressStyle::with_template("{spinner:.white} [{elapsed:.green}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let pb = ProgressBar::new_spinner()
        .with_message(format!("{}...", task_desc))
        .with_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));

    // Set up connection with log library so that progress bars don't jump around
    if let Some(multi) = MULTI.get() {
        multi.add(pb.clone());
    }

    pb
}

fn finish(target: &str, task_desc: &str, pb: ProgressBar, start_time: Instant) {
    pb.finish_and_clear();
    if let Some(multi) = MULTI.get() {
        multi.remove(&pb);
    }
    let elapsed = indicatif::HumanDuration(start_time.elapsed());
    info!(target: target, "{} finished (took {})", task_desc, elapsed);
}

pub async fn run_with_spinner_async<'a, F, Fut, Out>(
    target: &'a str, task_desc: &'a str, function: F,
) -> Out where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Out>,
{
    let start_time = Instant::now();
    let pb = spinner(task_desc);

    let out = function().await;

    finish(target, task_desc, pb, start_time);
    out
}
