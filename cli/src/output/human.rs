//! Human-readable terminal renderer.

use std::io::{self, Write};

use ecs_audit_common::types::{AuditOutcome, AuditReport, MissingInstance};
use owo_colors::OwoColorize as _;

use crate::output::OutputContext;

/// Printed when every instance is accounted for.
pub const ALL_GOOD: &str = "All good";

/// Printed once before the per-instance lines.
pub const MISSING_HEADER: &str = "Some tasks have not been installed in these instances";

/// Renders audit reports as plain terminal lines using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render an audit report to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub fn render_audit(&self, report: &AuditReport) -> io::Result<()> {
        self.write_audit(&mut io::stdout().lock(), report)
    }

    /// Write an audit report to `out`.
    ///
    /// `quiet` suppresses the success line and the header; the per-instance
    /// lines are the result and are always written.
    ///
    /// # Errors
    ///
    /// Returns an error if `out` cannot be written.
    pub fn write_audit(&self, out: &mut impl Write, report: &AuditReport) -> io::Result<()> {
        match report.outcome {
            AuditOutcome::AllGood => {
                if !self.ctx.quiet {
                    writeln!(out, "{}", ALL_GOOD.style(self.ctx.styles.success))?;
                }
            }
            AuditOutcome::MissingWorkload => {
                if !self.ctx.quiet {
                    writeln!(out, "{}", MISSING_HEADER.style(self.ctx.styles.warning))?;
                }
                for instance in &report.missing {
                    writeln!(out, "{}", format_missing_line(instance))?;
                }
            }
        }
        Ok(())
    }
}

/// Format one report line for an instance missing the family.
///
/// Example: `id:i-0abc  ContainerInstanceArn: arn:..., runningTaskCount: 2, remainingMEMORY:3000`
#[must_use]
pub fn format_missing_line(instance: &MissingInstance) -> String {
    let resource = instance.resource.as_ref().map_or_else(
        || "remaining:n/a".to_string(),
        |r| format!("remaining{}:{}", r.name, r.integer_value),
    );
    format!(
        "id:{}  ContainerInstanceArn: {}, runningTaskCount: {}, {resource}",
        instance.ec2_instance_id, instance.instance_ref, instance.running_tasks_count,
    )
}
