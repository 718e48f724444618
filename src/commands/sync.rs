use std::path::Path;

use anyhow::Context;
use pubsync::config::Config;
use pubsync::notes::{self, LogEntry};
use pubsync::scene_path::ScenePath;
use pubsync::sync::{FsHost, SyncEngine, SyncOutcome, SyncReporter};

use crate::commands::Options;
use crate::interactive::InteractivePrompter;

pub struct Synchronize;

impl Synchronize {
    pub fn execute(
        scene: &Path,
        worker: Option<&str>,
        memo: &str,
        options: &Options,
    ) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing sync command");
            println!("Scene: {}", scene.display());
        }

        // Load configuration and merge CLI flags (CLI takes precedence)
        let mut config = options.load_config()?;
        config.merge_cli_flags(worker, options.dry_run, options.yes);

        let mut host = FsHost::open(scene);
        let engine = SyncEngine::new(config.dry_run);

        let outcome = if config.yes || config.dry_run {
            // Non-interactive: distribute without prompting
            engine.sync(&mut host).context("Sync operation failed")?
        } else {
            // Interactive mode: confirm the plan before writing
            let mut prompter = InteractivePrompter::new();
            engine
                .sync_with_approver(&mut host, Some(Box::new(move |plan| prompter.confirm(plan))))
                .context("Sync operation failed")?
        };

        // A real distribution is recorded in the notes log beside pub.
        if let SyncOutcome::Distributed { plan, .. } = &outcome {
            if !config.dry_run {
                let parsed = ScenePath::parse(scene)?;
                let log_path = notes::log_path(&parsed);
                let entry = LogEntry {
                    worker: Self::resolve_worker(&config),
                    date: chrono::Local::now().format("%Y/%m/%d %H:%M").to_string(),
                    memo: memo.to_string(),
                    version_info: notes::version_summary(plan),
                };
                notes::append(&log_path, &entry)
                    .with_context(|| format!("Failed to append note: {}", log_path.display()))?;
            }
        }

        // Display results
        let summary = SyncReporter::generate_summary(&outcome);
        println!("{summary}");

        Ok(())
    }

    /// Worker name: config/CLI value, then the login environment
    fn resolve_worker(config: &Config) -> String {
        config.worker.clone().unwrap_or_else(|| {
            std::env::var("USER")
                .or_else(|_| std::env::var("USERNAME"))
                .unwrap_or_else(|_| "unknown".to_string())
        })
    }
}
