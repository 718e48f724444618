use std::path::Path;

use pubsync::comparison::ConsistencyChecker;
use pubsync::scene_path::ScenePath;

use crate::commands::Options;

pub struct Status;

impl Status {
    pub fn execute(scene: &Path, options: &Options) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing status command");
            println!("Scene: {}", scene.display());
        }

        let parsed = ScenePath::parse(scene)?;
        let state = ConsistencyChecker::check(&parsed);

        if state.is_synchronized() {
            println!("All files are same.");
        } else {
            println!("Need to sync: {state}");
        }

        Ok(())
    }
}
