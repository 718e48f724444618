use std::path::Path;

use pubsync::scanner::VersionScanner;
use pubsync::scene_path::ScenePath;
use pubsync::version;

use crate::commands::Options;

pub struct Info;

impl Info {
    pub fn execute(scene: &Path, options: &Options) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing info command");
        }

        let parsed = ScenePath::parse(scene)?;

        println!("File:      {}", parsed.file_name());
        println!("Stage:     {}", parsed.stage().as_str());
        println!("Wip:       {}", parsed.wip().as_str());
        println!("Version:   {}", parsed.version_token());
        println!("Base:      {}", parsed.name_without_version());
        println!("Dev dir:   {}", parsed.dev_directory().display());
        println!("Pub dir:   {}", parsed.pub_directory().display());
        println!("Abc dir:   {}", parsed.abc_data_directory().display());
        println!("Abc alias: {}", parsed.abc_alias_path().display());

        let dev_max = VersionScanner::max_version(&parsed.dev_directory())?;
        let pub_max = VersionScanner::max_version(&parsed.pub_directory())?;
        match version::allocate(dev_max, pub_max) {
            Ok(next) => println!("Next:      {next}"),
            Err(e) => println!("Next:      unavailable ({e})"),
        }

        Ok(())
    }
}
