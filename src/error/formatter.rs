use std::error::Error;
use std::io::IsTerminal;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use regex::Regex;

use super::rich::RichError;

/// Formats RichError for CLI output
pub struct ErrorFormatter {
    verbose: bool,
    use_color: bool,
}

impl ErrorFormatter {
    /// Creates a new ErrorFormatter with default TTY detection
    pub fn new(verbose: bool) -> Self {
        Self::with_color_detection(verbose, Self::default_should_use_color)
    }

    /// Creates a new ErrorFormatter with injectable TTY detection for testing
    pub fn with_color_detection(verbose: bool, detect_color: fn() -> bool) -> Self {
        let use_color = detect_color();
        Self { verbose, use_color }
    }

    fn default_should_use_color() -> bool {
        std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
    }

    /// Formats the error for display
    pub fn format(&self, error: &RichError) -> String {
        let mut output = format!("error[{}]: {}", error.code().as_str(), error.message());

        let context_lines = self.format_context(error);
        if !context_lines.is_empty() {
            output.push('\n');
            output.push_str(&context_lines);
        }

        if self.verbose {
            output.push_str("\n  |");
            output.push_str(&format!("\n  | Cause: {}", error.code().cause()));

            output.push_str("\n  |");
            output.push_str("\n  | Remediation:");
            for line in error.code().remediation().lines() {
                output.push_str(&format!("\n  |   {}", line));
            }

            let source_chain = self.format_source_chain(error);
            if !source_chain.is_empty() {
                output.push_str("\n  |");
                output.push_str(&format!("\n  | Source chain:\n{}", source_chain));
            }

            output.push_str("\n  |");
            output.push_str("\n  = note: use `authctl --help` for more information");
        }

        // マスキングは色付け前に行う
        let masked = mask_sensitive(&output);

        if self.use_color {
            apply_color(&masked)
        } else {
            masked
        }
    }

    fn format_context(&self, error: &RichError) -> String {
        let ctx = error.context();
        let mut lines = Vec::new();

        // Display order: store_path -> account -> subject -> additional (sorted)
        if let Some(path) = &ctx.store_path {
            lines.push(format!("  --> {}", path.to_string_lossy()));
        }

        if let Some(account) = &ctx.account {
            lines.push(format!("  --> account: {}", account));
        }

        if let Some(subject) = &ctx.subject {
            lines.push(format!("  --> subject: {}", subject));
        }

        for (key, value) in &ctx.additional {
            lines.push(format!("  --> {}: {}", key, value));
        }

        lines.join("\n")
    }

    fn format_source_chain(&self, error: &RichError) -> String {
        let mut chain = Vec::new();
        let mut current: Option<&(dyn std::error::Error + 'static)> = error.source();

        while let Some(err) = current {
            chain.push(format!("  |   - {}", err));
            current = err.source();
        }

        chain.join("\n")
    }
}

fn jwt_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"eyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*").expect("valid regex")
    })
}

fn token_param_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(token=)[^\s&]+").expect("valid regex"))
}

/// Masks activation tokens in the text
fn mask_sensitive(text: &str) -> String {
    let masked = jwt_re().replace_all(text, "<activation-token>");
    token_param_re().replace_all(&masked, "$1***").to_string()
}

fn apply_color(text: &str) -> String {
    let mut result = String::new();

    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        if line.starts_with("error[") {
            let bracket_end = line.find(']').map(|i| i + 1).unwrap_or(0);
            let (prefix, rest) = line.split_at(bracket_end);
            result.push_str(&format!("{}{}", prefix.red().bold(), rest.bold()));
        } else if line.starts_with("  -->") {
            result.push_str(&line.blue().to_string());
        } else if line.starts_with("  | Cause:") {
            result.push_str(&line.yellow().to_string());
        } else if line.starts_with("  | Remediation:") {
            result.push_str(&line.green().to_string());
        } else if line.starts_with("  = note:") || line.starts_with("  |   -") {
            result.push_str(&line.dimmed().to_string());
        } else {
            result.push_str(line);
        }
    }

    result
}
