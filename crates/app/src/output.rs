//! Console reporting of deployment progress.

use camunda_deploy_application::{ApplicationError, DeploymentError};
use camunda_deploy_infrastructure::{to_json_pretty, to_json_redacted};
use console::{StyledObject, style};
use serde::Serialize;
use serde_json::json;

/// How much the reporter prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Nothing but the JSON result.
    Json,
    /// Nothing at all.
    Quiet,
    /// Progress lines.
    Normal,
    /// Progress lines with payloads.
    Verbose,
}

/// Line markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Step finished successfully
    Success,
    /// Step failed
    Error,
    /// Step in progress
    Progress,
    /// Finished without changes
    Done,
}

impl Marker {
    fn styled(self) -> StyledObject<&'static str> {
        match self {
            Self::Success => style("✔").green(),
            Self::Error => style("✖").red(),
            Self::Progress => style("○").dim(),
            Self::Done => style("●").dim(),
        }
    }
}

/// Prints progress lines to the console.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    mode: OutputMode,
}

impl Reporter {
    /// Creates a reporter for the given mode.
    pub const fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Picks the mode from the command-line flags. JSON output implies
    /// quiet progress.
    pub const fn from_flags(json: bool, quiet: bool, verbose: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else if quiet {
            OutputMode::Quiet
        } else if verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        };
        Self::new(mode)
    }

    /// The active mode.
    pub const fn mode(self) -> OutputMode {
        self.mode
    }

    const fn prints_progress(self) -> bool {
        matches!(self.mode, OutputMode::Normal | OutputMode::Verbose)
    }

    /// Blank line before the first progress line.
    pub fn start(self) {
        if self.mode != OutputMode::Json {
            println!();
        }
    }

    /// Prints a progress line without payload.
    pub fn line(self, marker: Marker, message: &str) {
        self.log::<()>(marker, message, None);
    }

    /// Prints a progress line, with its payload in verbose mode.
    ///
    /// `message` is printed as given; use [`bold`] for emphasis.
    pub fn log<T>(self, marker: Marker, message: &str, payload: Option<&T>)
    where
        T: Serialize + ?Sized,
    {
        if !self.prints_progress() {
            return;
        }

        println!("{}", format_line(marker, message));

        if self.mode == OutputMode::Verbose
            && let Some(payload) = payload
        {
            match to_json_redacted(payload) {
                Ok(json) => println!("{}", indent(&json, "   ")),
                Err(e) => tracing::warn!(error = %e, "failed to serialize payload"),
            }
        }
    }

    /// Prints the JSON result of a successful run.
    pub fn result<T: Serialize + ?Sized>(self, value: &T) {
        if self.mode != OutputMode::Json {
            return;
        }
        match to_json_redacted(value) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!(error = %e, "failed to serialize result"),
        }
    }

    /// Reports a failed run. The message always goes to stderr; JSON mode
    /// prints `null` as the result.
    pub fn failure(self, error: &anyhow::Error) {
        eprintln!("{}", format_line(Marker::Error, &error.to_string()));

        match self.mode {
            OutputMode::Verbose => {
                eprintln!("{}", indent(&error_details(error), "   "));
            }
            OutputMode::Json => println!("null"),
            OutputMode::Normal | OutputMode::Quiet => {
                println!("\nRun with --verbose for additional debug output.");
            }
        }
    }
}

/// Emphasized text for outcome lines.
pub fn bold(text: &str) -> String {
    style(text).bold().to_string()
}

/// Formats ` <marker> <message>`.
pub fn format_line(marker: Marker, message: &str) -> String {
    format!(" {} {message}", marker.styled())
}

/// Prefixes every line of `text` with `prefix`.
pub fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Diagnostic detail for verbose failure output.
pub fn error_details(error: &anyhow::Error) -> String {
    let deployment_error = error
        .downcast_ref::<ApplicationError>()
        .and_then(|e| match e {
            ApplicationError::Deployment(d) => Some(d),
            _ => None,
        })
        .or_else(|| error.downcast_ref::<DeploymentError>());

    let Some(deployment_error) = deployment_error else {
        return format!("{error:?}");
    };

    let details = json!({
        "message": deployment_error.message(),
        "status": deployment_error.status(),
        "statusText": deployment_error.status_text(),
        "url": deployment_error.url(),
        "deployment": deployment_error.deployment(),
    });

    to_json_redacted(&details)
        .or_else(|_| to_json_pretty(&details))
        .unwrap_or_else(|_| format!("{error:?}"))
}
