use std::fs;
use std::path::Path;

use anyhow::Context;
use pubsync::notes;
use pubsync::scene_path::ScenePath;

pub struct Log;

impl Log {
    pub fn execute(scene: &Path) -> anyhow::Result<()> {
        let parsed = ScenePath::parse(scene)?;
        let path = notes::log_path(&parsed);

        if !path.is_file() {
            println!("No notes yet: {}", path.display());
            return Ok(());
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read notes log: {}", path.display()))?;

        // Strip the per-entry BOMs for terminal display.
        print!("{}", text.replace('\u{feff}', ""));

        Ok(())
    }
}
