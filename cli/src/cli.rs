//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{ArgAction, Parser};
use ecs_audit_common::types::AuditOutcome;
use tracing_subscriber::EnvFilter;

use crate::app::{AppContext, OutputFlags};
use crate::application::ports::ConfigStore;
use crate::commands;
use crate::domain::request::validate_family;
use crate::infra::{EcsRegistry, YamlConfigStore};

/// Exit status when at least one instance is missing the family.
pub const EXIT_MISSING: u8 = 1;

/// Exit status for any fatal error.
pub const EXIT_FATAL: u8 = 2;

/// Report ECS container instances that run no task of a given family
#[derive(Parser, Debug)]
#[command(name = "ecs-audit", version)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Only print the instances that are missing the family
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub audit: commands::audit::AuditArgs,
}

impl Cli {
    /// Output flags carried into `AppContext`.
    #[must_use]
    pub fn output_flags(&self) -> OutputFlags {
        OutputFlags {
            no_color: self.no_color,
            quiet: self.quiet,
            json: self.json,
        }
    }

    /// Execute the audit.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid, the family is missing, or
    /// any registry call fails.
    pub async fn run(self) -> Result<AuditOutcome> {
        self.run_with_store(&YamlConfigStore).await
    }

    /// Execute the audit with an injected config store.
    ///
    /// The family is validated before the config file is read and before
    /// any AWS client is constructed.
    ///
    /// # Errors
    ///
    /// See [`Cli::run`].
    pub async fn run_with_store(self, store: &impl ConfigStore) -> Result<AuditOutcome> {
        validate_family(self.audit.family.as_deref())?;
        let config = store.load()?;
        let request = self.audit.request(&config)?;
        let settings = self.audit.connection(&config);
        tracing::info!(cluster = %request.cluster, family = %request.family, "starting audit");

        let app = AppContext::new(self.output_flags());
        let registry = EcsRegistry::connect(&settings).await;
        commands::audit::run(&app, &request, &registry).await
    }
}

/// Map an audit outcome to the process exit status.
#[must_use]
pub fn exit_status(outcome: AuditOutcome) -> u8 {
    if outcome.is_all_good() { 0 } else { EXIT_MISSING }
}

/// Build the log filter for a `-v` count. `RUST_LOG` wins when set.
#[must_use]
pub fn log_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => "warn",
            1 => "ecs_audit_cli=info,warn",
            2 => "ecs_audit_cli=debug,warn",
            _ => "debug",
        })
    })
}

/// Initialise tracing on stderr. Call once, from `main`.
pub fn init_tracing(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
