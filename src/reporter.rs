//! Status output for the business components.
//!
//! Components never print directly. They receive a `&dyn Reporter` and call
//! [`Reporter::report`]; the binary plugs in [`ConsoleReporter`], tests plug in
//! whatever records the messages.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{failure, info, success, warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

pub trait Reporter: Send + Sync {
    fn report(&self, level: Level, message: &str);

    /// Signals that a longer running step started.
    fn progress(&self, _message: &str) {}

    /// Ends whatever [`Reporter::progress`] started.
    fn finish_progress(&self) {}
}

/// Colorized console output with an optional spinner.
///
/// While the spinner is running every report suspends it, so messages never
/// get mixed into the spinner line.
pub struct ConsoleReporter {
    progress: ProgressBar,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            progress: ProgressBar::hidden(),
        }
    }

    fn start_spinner(&self, message: &str) {
        self.progress.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        self.progress.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        self.progress.set_message(message.to_string());
        self.progress.enable_steady_tick(Duration::from_millis(100));
    }

    fn finish_spinner(&self) {
        self.progress.finish_and_clear();
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        self.progress.suspend(|| match level {
            Level::Info => info!("{}", message),
            Level::Success => success!("{}", message),
            Level::Warning => warning!("{}", message),
            Level::Error => failure!("{}", message),
        });
    }

    fn progress(&self, message: &str) {
        self.start_spinner(message);
    }

    fn finish_progress(&self) {
        self.finish_spinner();
    }
}

/// Reporter that drops everything.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _level: Level, _message: &str) {}
}
