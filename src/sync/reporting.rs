//! Sync operation reporting

use std::fmt::Write;

use super::{SyncOutcome, SyncRoute};

/// Sync operation reporter
pub struct SyncReporter;

impl SyncReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(outcome: &SyncOutcome) -> String {
        let mut output = String::new();

        output.push_str("\n=== Sync Summary ===\n");
        match outcome {
            SyncOutcome::AlreadySynchronized(state) => {
                let _ = writeln!(output, "Nothing to do: {state}");
                output.push_str("Status: ✓ Already synchronized\n");
            }
            SyncOutcome::Cancelled => {
                output.push_str("Status: cancelled, nothing written\n");
            }
            SyncOutcome::Distributed { route, plan } => {
                let _ = writeln!(output, "Version: {}", plan.version);
                let _ = writeln!(output, "Route:   {}", Self::describe_route(*route));
                let _ = writeln!(output, "Dev:     {}", plan.dev_target.display());
                let _ = writeln!(output, "Pub:     {}", plan.pub_target.display());
                let _ = writeln!(output, "Alias:   {}", plan.alias_target.display());
                output.push_str("Status: ✓ Success\n");
            }
        }

        output
    }

    const fn describe_route(route: SyncRoute) -> &'static str {
        match route {
            SyncRoute::FromDev => "dev -> pub, alias",
            SyncRoute::FromPub => "pub -> dev, alias",
            SyncRoute::NormalizeAlias => "alias -> dev, pub",
        }
    }
}
