//! Output Rendering
//!
//! Renders an export outcome for humans. JSON output is produced by the
//! event stream instead, so its renderer only writes nothing.

use std::io::{self, Write};

use crate::application::ExportOutcome;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON event stream for scripting
    Json,
    /// Only the final destination path
    Minimal,
}

impl OutputFormat {
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (true, _) => Self::Json,
            (false, true) => Self::Minimal,
            (false, false) => Self::Text,
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    write: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            write: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            write: "->",
        }
    }
}

/// Trait for rendering export outcomes
pub trait ExportOutcomeRenderer {
    fn render(&self, outcome: &ExportOutcome, out: &mut dyn Write) -> io::Result<()>;
}

/// Text renderer for export outcomes
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl ExportOutcomeRenderer for TextRenderer {
    fn render(&self, outcome: &ExportOutcome, out: &mut dyn Write) -> io::Result<()> {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };

        writeln!(out, "{} Export Complete", icons.check)?;
        writeln!(out)?;
        writeln!(out, "  Policy: {}", outcome.policy_name)?;
        writeln!(out, "  Destination: {}", outcome.destination.display())?;

        writeln!(out, "  Cookbooks ({}):", outcome.packages.len())?;
        for package in &outcome.packages {
            writeln!(out, "    {} {}", icons.write, package)?;
        }

        if let Some(archive) = &outcome.archive {
            writeln!(out, "  Archive: {}", archive.path.display())?;
            writeln!(out, "  Digest: {}", archive.digest)?;
            if self.verbose > 0 {
                writeln!(out, "  Entries ({}):", archive.entries.len())?;
                for entry in &archive.entries {
                    writeln!(out, "    {entry}")?;
                }
            }
        } else if self.verbose > 0 {
            writeln!(out, "  Replaced ({}):", outcome.committed.len())?;
            for path in &outcome.committed {
                writeln!(out, "    {} {}", icons.write, path.display())?;
            }
        }

        Ok(())
    }
}

/// Prints only the exported artifact path, for scripts
pub struct MinimalRenderer;

impl ExportOutcomeRenderer for MinimalRenderer {
    fn render(&self, outcome: &ExportOutcome, out: &mut dyn Write) -> io::Result<()> {
        match outcome.archive_path() {
            Some(path) => writeln!(out, "{}", path.display()),
            None => writeln!(out, "{}", outcome.destination.display()),
        }
    }
}

/// Events already carry the outcome in JSON mode
pub struct JsonRenderer;

impl ExportOutcomeRenderer for JsonRenderer {
    fn render(&self, _outcome: &ExportOutcome, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Create a renderer based on format
pub fn create_renderer(
    format: OutputFormat,
    unicode: bool,
    verbose: u8,
) -> Box<dyn ExportOutcomeRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode, verbose }),
        OutputFormat::Minimal => Box::new(MinimalRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
