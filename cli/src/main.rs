//! ecs-audit - report ECS container instances missing a task family

use std::process::ExitCode;

use clap::Parser;
use ecs_audit_cli::cli::{Cli, EXIT_FATAL, exit_status, init_tracing};
use ecs_audit_cli::output::OutputContext;
use ecs_audit_cli::output::json::{error_code, format_error};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let flags = cli.output_flags();

    match cli.run().await {
        Ok(outcome) => ExitCode::from(exit_status(outcome)),
        Err(e) => {
            let message = format!("{e:#}");
            let json_error = flags
                .json
                .then(|| format_error(&message, error_code(&e)).ok())
                .flatten();
            match json_error {
                Some(obj) => println!("{obj}"),
                None => OutputContext::new(flags.no_color, false).error(&message),
            }
            ExitCode::from(EXIT_FATAL)
        }
    }
}
