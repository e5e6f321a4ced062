//! Command-line arguments

use clap::Parser;

const ENDPOINT_HELP: &str = "\
Endpoint Configuration:
  The engine endpoint and credentials are read from the environment:

    CAMUNDA_URL
    CAMUNDA_AUTH_USERNAME
    CAMUNDA_AUTH_PASSWORD
    CAMUNDA_AUTH_BEARER

  A .env file in the working directory is read too, if present.

Examples:
  $ camunda-deploy -n invoice -S node-worker-1 *.bpmn
  $ camunda-deploy -n invoice --json *.bpmn > result.json";

/// Deploy BPMN, DMN and CMMN resources to a Camunda engine.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "camunda-deploy", version, about, after_help = ENDPOINT_HELP)]
pub struct Args {
    /// The deployment name
    #[arg(short, long)]
    pub name: Option<String>,

    /// The (optional) tenant to deploy to
    #[arg(short, long, value_name = "ID")]
    pub tenant_id: Option<String>,

    /// The (optional) deployment source
    #[arg(short = 'S', long, short_alias = 's')]
    pub source: Option<String>,

    /// Log verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Log no output
    #[arg(long, alias = "quite")]
    pub quiet: bool,

    /// Output deployed resources as JSON
    #[arg(long)]
    pub json: bool,

    /// Resource files or glob patterns
    #[arg(value_name = "RESOURCES")]
    pub resources: Vec<String>,
}

impl Args {
    /// Rejects flag combinations that cannot be honoured together.
    ///
    /// # Errors
    ///
    /// Returns an error if both `--json` and `--verbose` are set.
    pub fn check(&self) -> anyhow::Result<()> {
        if self.json && self.verbose {
            anyhow::bail!("--verbose and --json are exclusive");
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_full() {
        let args = Args::try_parse_from([
            "camunda-deploy",
            "-n",
            "invoice",
            "-t",
            "tenant-1",
            "-S",
            "node-worker-1",
            "--verbose",
            "*.bpmn",
            "approve.dmn",
        ])
        .unwrap();

        assert_eq!(args.name.as_deref(), Some("invoice"));
        assert_eq!(args.tenant_id.as_deref(), Some("tenant-1"));
        assert_eq!(args.source.as_deref(), Some("node-worker-1"));
        assert!(args.verbose);
        assert_eq!(args.resources, vec!["*.bpmn", "approve.dmn"]);
    }

    #[test]
    fn test_quite_alias() {
        let args = Args::try_parse_from(["camunda-deploy", "--quite", "a.bpmn"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_lowercase_source_alias() {
        let args = Args::try_parse_from(["camunda-deploy", "-s", "node-app"]).unwrap();
        assert_eq!(args.source.as_deref(), Some("node-app"));
    }

    #[test]
    fn test_json_and_verbose_are_exclusive() {
        let args = Args::try_parse_from(["camunda-deploy", "--json", "--verbose"]).unwrap();
        let error = args.check().unwrap_err();
        assert_eq!(error.to_string(), "--verbose and --json are exclusive");
    }

    #[test]
    fn test_check_accepts_single_output_flag() {
        let args = Args::try_parse_from(["camunda-deploy", "--json", "a.bpmn"]).unwrap();
        assert!(args.check().is_ok());
    }

    #[test]
    fn test_name_is_optional_for_parsing() {
        let args = Args::try_parse_from(["camunda-deploy", "a.bpmn"]).unwrap();
        assert_eq!(args.name, None);
    }
}
