//! Terminal output for the storefront CLI.
//!
//! Human-readable lines go to stdout, diagnostics to stderr. In `--json`
//! mode every decorated line is suppressed and commands print one JSON
//! document instead.

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use storefront_render::RenderStatus;

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Success,
    Warn,
    Error,
    Debug,
}

impl Tone {
    fn marker(self) -> StyledObject<&'static str> {
        match self {
            Tone::Info => style("ℹ").blue(),
            Tone::Success => style("✓").green(),
            Tone::Warn => style("⚠").yellow(),
            Tone::Error => style("✗").red(),
            Tone::Debug => style("→").dim(),
        }
    }

    fn is_diagnostic(self) -> bool {
        matches!(self, Tone::Warn | Tone::Error | Tone::Debug)
    }
}

/// Output handler shared by every command.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn emit(&self, tone: Tone, msg: &str) {
        if self.json || (tone == Tone::Debug && !self.verbose) {
            return;
        }
        let body = match tone {
            Tone::Error => style(msg).red().to_string(),
            Tone::Debug => style(msg).dim().to_string(),
            _ => msg.to_string(),
        };
        if tone.is_diagnostic() {
            eprintln!("{} {}", tone.marker(), body);
        } else {
            println!("{} {}", tone.marker(), body);
        }
    }

    fn plain(&self, line: String) {
        if !self.json {
            println!("{line}");
        }
    }

    pub fn info(&self, msg: &str) {
        self.emit(Tone::Info, msg);
    }

    pub fn success(&self, msg: &str) {
        self.emit(Tone::Success, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.emit(Tone::Warn, msg);
    }

    /// Errors are still reported in JSON mode, as `{"error": ...}` on stderr.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            self.emit(Tone::Error, msg);
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        self.emit(Tone::Debug, msg);
    }

    pub fn header(&self, msg: &str) {
        self.plain(format!("\n{}", style(msg).bold().underlined()));
    }

    pub fn step(&self, num: usize, total: usize, msg: &str) {
        self.plain(format!("{} {}", style(format!("[{num}/{total}]")).dim(), msg));
    }

    pub fn kv(&self, key: &str, value: &str) {
        self.plain(format!("  {}: {}", style(key).dim(), value));
    }

    pub fn list_item(&self, item: &str) {
        self.plain(format!("  {} {}", style("•").dim(), item));
    }

    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        self.plain(format!("  {}", pad_columns(cols, widths)));
    }

    /// Print `value` as pretty JSON, whatever the mode.
    pub fn json<T: Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => self.error(&format!("Failed to serialize output: {e}")),
        }
    }

    /// Bar over `len` items; hidden in JSON mode.
    pub fn progress(&self, len: u64, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(bar_style) = ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
            pb.set_style(bar_style.progress_chars("#>-"));
        }
        pb.set_message(msg.to_string());
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn pad_columns(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths)
        .map(|(col, &width)| format!("{col:width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Colored label for a render status.
pub fn status_badge(status: RenderStatus) -> String {
    let label = status.as_str();
    match status {
        RenderStatus::Ok => style(label).green().to_string(),
        RenderStatus::NotFound => style(label).yellow().to_string(),
        RenderStatus::Error => style(label).red().to_string(),
    }
}

/// Milliseconds as `42ms`, `1.5s` or `2m 5s`.
pub fn format_duration_ms(ms: u64) -> String {
    match ms {
        0..=999 => format!("{ms}ms"),
        1_000..=59_999 => format!("{:.1}s", ms as f64 / 1000.0),
        _ => {
            let secs = ms / 1000;
            format!("{}m {}s", secs / 60, secs % 60)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(42), "42ms");
        assert_eq!(format_duration_ms(1500), "1.5s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_pad_columns() {
        assert_eq!(pad_columns(&["/", "home"], &[4, 6]), "/     home  ");
    }

    #[test]
    fn test_status_badge_keeps_label() {
        console::set_colors_enabled(false);
        assert_eq!(status_badge(RenderStatus::NotFound), "not_found");
        assert_eq!(status_badge(RenderStatus::Ok), "ok");
    }

    #[test]
    fn test_json_mode_hides_progress() {
        let out = Output::new(true, true);
        assert!(out.is_json());
        assert!(out.progress(3, "pages").is_hidden());
    }
}
