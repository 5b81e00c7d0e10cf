//! Console output utilities.

use console::{style, Term};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

use crate::error::Result;
use crate::output::progress::{create_download_bar, create_spinner};

/// User-facing output. Every component that prints receives one of these;
/// when quiet, only errors are written.
#[derive(Clone)]
pub struct Console {
    quiet: bool,
    bars: MultiProgress,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        let bars = if quiet {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        } else {
            MultiProgress::new()
        };
        Self { quiet, bars }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn print(&self, message: String) {
        if !self.quiet {
            self.bars.suspend(|| println!("{}", message));
        }
    }

    /// Print an info message.
    pub fn info(&self, message: &str) {
        self.print(format!("{} {}", style("INFO").cyan().bold(), message));
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        self.print(format!("{} {}", style("OK").green().bold(), message));
    }

    /// Print an error message. Not suppressed by quiet mode.
    pub fn error(&self, message: &str) {
        self.bars
            .suspend(|| eprintln!("{} {}", style("ERROR").red().bold(), message));
    }

    /// Print the application banner.
    pub fn banner(&self) {
        let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Reddit Video Downloader                           ║
║     Only v.redd.it videos are supported.              ║
║     Please only enter Reddit comment links.           ║
╚═══════════════════════════════════════════════════════╝
"#;
        self.print(style(banner).cyan().to_string());
    }

    /// Progress display for one download. Falls back to a spinner when the
    /// size is unknown; hidden when quiet.
    pub fn download_bar(&self, total: Option<u64>, label: &str) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let bar = match total {
            Some(total) => create_download_bar(total, label),
            None => create_spinner(label),
        };
        self.bars.add(bar)
    }

    /// Ask a question on the terminal and return the trimmed answer.
    pub fn prompt(&self, question: &str) -> Result<String> {
        let term = Term::stdout();
        term.write_str(question)?;
        let answer = term.read_line()?;
        Ok(answer.trim().to_string())
    }

    /// Ask a yes/no question; only `y` counts as yes.
    pub fn confirm(&self, question: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{} (y/N): ", question))?;
        Ok(answer == "y")
    }
}
