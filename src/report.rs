use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use pixelsvg::PixelSvgError;
use tracing_subscriber::EnvFilter;

use crate::cli::LoggingArgs;

const LOG_ENV: &str = "PIXELSVG_LOG";
const SPINNER_FRAMES: &[&str] = &["…", "‥", ".", "‥", "✔"];

/// Install the stderr log subscriber; `PIXELSVG_LOG` overrides the level picked from the flags.
pub fn init_logging(logging: LoggingArgs) {
    let default_level = if logging.quiet {
        "off"
    } else if logging.verbose {
        "info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Terminal feedback for one conversion: a spinner naming the current step plus verbose logs.
pub struct Status {
    spinner: ProgressBar,
    logging: LoggingArgs,
}

impl Status {
    pub fn new(logging: LoggingArgs) -> Self {
        let spinner = if logging.quiet {
            ProgressBar::hidden()
        } else {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner())
                    .tick_strings(SPINNER_FRAMES),
            );
            spinner.enable_steady_tick(Duration::from_millis(120));
            spinner
        };
        Self { spinner, logging }
    }

    /// Show the step currently running.
    pub fn step(&self, message: &'static str) {
        self.spinner.set_message(message);
    }

    /// Log a progress detail when running verbosely.
    pub fn detail(&self, message: &str) {
        if self.logging.verbose {
            self.spinner.suspend(|| tracing::info!("{message}"));
        }
    }

    /// Remove the spinner, e.g. before writing to standard output.
    pub fn clear(&self) {
        self.spinner.finish_and_clear();
    }

    pub fn succeed(&self, elapsed: Duration) {
        self.clear();
        if !self.logging.quiet {
            eprintln!("✔ {}", finished_message(elapsed));
        }
    }

    pub fn fail(&self, err: &PixelSvgError) {
        self.clear();
        report_error(err);
        if !self.logging.quiet {
            eprintln!("✖ run with --help to see usage");
        }
    }
}

pub fn report_error(err: &PixelSvgError) {
    match err {
        PixelSvgError::FrameOutOfRange { index, frames } => {
            eprintln!("Error: frame {index} does not exist");
            eprintln!("The input image has {frames} frame(s); frames are numbered from 0.");
        }
        _ => {
            eprintln!("Error: {err}");
        }
    }
}

/// `finished processing in S.mmms`
pub fn finished_message(elapsed: Duration) -> String {
    format!(
        "finished processing in {}.{:03}s",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_message_pads_millis() {
        assert_eq!(
            finished_message(Duration::from_millis(1_007)),
            "finished processing in 1.007s"
        );
        assert_eq!(
            finished_message(Duration::from_millis(250)),
            "finished processing in 0.250s"
        );
    }

    #[test]
    fn quiet_status_is_hidden() {
        let status = Status::new(LoggingArgs {
            quiet: true,
            verbose: false,
        });
        assert!(status.spinner.is_hidden());
        status.step("reading input");
        status.detail("not shown");
        status.clear();
    }
}
