use console::{Style, Term};
use pen_catalog_api::RouteEntry;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Output format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

/// How the CLI talks to the terminal, derived from global flags.
///
/// Data (the route table) goes to stdout; status lines, warnings and
/// errors go to stderr.
pub struct OutputContext {
    pub mode: OutputMode,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    pub fn from_global(global: &GlobalOpts) -> Self {
        let mode = match global.format.as_str() {
            "json" => OutputMode::Json,
            "plain" => OutputMode::Plain,
            _ => OutputMode::Human,
        };

        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            mode,
            quiet: global.quiet,
            use_color,
        }
    }

    fn human_only(&self) -> bool {
        !self.quiet && self.mode == OutputMode::Human
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_color {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// `ok <msg>` on stderr, human mode only.
    pub fn success(&self, msg: &str) {
        if self.human_only() {
            eprintln!("{} {msg}", self.paint("ok", Style::new().green().bold()));
        }
    }

    /// Warning on stderr in every mode unless quiet.
    pub fn warn(&self, msg: &str) {
        if self.quiet {
            return;
        }
        match self.mode {
            OutputMode::Human => {
                let label = self.paint("warning:", Style::new().yellow().bold());
                eprintln!("{label} {msg}");
            }
            OutputMode::Json => eprintln!("{}", serde_json::json!({ "warning": msg })),
            OutputMode::Plain => eprintln!("warning\t{msg}"),
        }
    }

    /// Plain status line on stderr, human mode only.
    pub fn status(&self, msg: &str) {
        if self.human_only() {
            eprintln!("{msg}");
        }
    }

    /// Errors are printed even when quiet.
    pub fn print_error(&self, err: &CliError) {
        match self.mode {
            OutputMode::Human => {
                eprintln!("{} {err}", self.paint("error:", Style::new().red().bold()));
            }
            OutputMode::Json => eprintln!("{}", err.to_json()),
            OutputMode::Plain => eprintln!("error\t{err}"),
        }
    }

    pub fn show_progress(&self) -> bool {
        self.human_only() && Term::stderr().is_term()
    }

    /// Print the route table to stdout in the selected mode.
    pub fn print_routes(&self, table: &[RouteEntry]) -> Result<(), CliError> {
        match self.mode {
            OutputMode::Json => {
                let rendered = serde_json::to_string_pretty(table)
                    .map_err(|e| CliError::Other(e.to_string()))?;
                println!("{rendered}");
            }
            OutputMode::Plain => {
                for line in plain_route_lines(table) {
                    println!("{line}");
                }
            }
            OutputMode::Human => {
                if !self.quiet {
                    println!("{}", self.paint("Routes", Style::new().bold()));
                }
                for line in self.human_route_lines(table) {
                    println!("{line}");
                }
            }
        }
        Ok(())
    }

    /// Column-aligned rows; list routes carry a `[Bearer]` tag.
    fn human_route_lines(&self, table: &[RouteEntry]) -> Vec<String> {
        let name_width = table.iter().map(|r| r.name.len()).max().unwrap_or(0);
        let method_width = table
            .iter()
            .map(|r| r.methods.join("|").len())
            .max()
            .unwrap_or(0);

        table
            .iter()
            .map(|r| {
                let line = format!(
                    "  {:<name_width$}  {:<method_width$}  {}",
                    r.name,
                    r.methods.join("|"),
                    r.path,
                );
                match r.security {
                    Some(scheme) => {
                        let tag = self.paint(&format!("[{scheme}]"), Style::new().cyan());
                        format!("{line}  {tag}")
                    }
                    None => line,
                }
            })
            .collect()
    }
}

/// Tab-separated `name  methods  path  security` rows, `-` when unsecured.
fn plain_route_lines(table: &[RouteEntry]) -> Vec<String> {
    table
        .iter()
        .map(|r| {
            format!(
                "{}\t{}\t{}\t{}",
                r.name,
                r.methods.join(","),
                r.path,
                r.security.unwrap_or("-")
            )
        })
        .collect()
}
