//! Spinner for the one-time startup work (artifact loading).

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a steady-ticking spinner with `message`. Caller finishes it.
pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
