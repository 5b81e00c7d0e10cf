//! Progress bar utilities.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a byte progress bar for a download of known size.
pub fn create_download_bar(total: u64, label: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template(
                "{msg:>16} [{bar:40.cyan/blue}] {bytes}/{total_bytes} {percent:>3}% ({eta})",
            )
            .unwrap()
            .progress_chars("#>-"),
    );
    bar.set_message(label.to_string());
    bar
}

/// Create a byte spinner for a download without `content-length`.
pub fn create_spinner(label: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg:>14} {bytes} ({bytes_per_sec})")
            .unwrap(),
    );
    spinner.set_message(label.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}
