//! Notes log kept beside the published versions
//!
//! Every successful sync appends a bordered block to `log.txt` in the
//! pub directory. Each appended entry starts with its own UTF-8 BOM;
//! that is the byte layout the pipeline's earlier tooling produced when
//! appending through a BOM-writing codec, and existing logs are read by
//! editors that expect it, so the format is kept as-is.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, SyncError};
use crate::scene_path::ScenePath;
use crate::sync::SyncPlan;
use crate::version::Version;

/// File name of the notes log inside the pub directory
const LOG_FILE_NAME: &str = "log.txt";

/// UTF-8 byte order mark written before each entry
const BOM: &str = "\u{feff}";

/// One appended note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Who ran the sync
    pub worker: String,
    /// Date text as reported by the caller
    pub date: String,
    /// Free-text memo
    pub memo: String,
    /// Version summary line, see [`version_summary`]
    pub version_info: String,
}

/// Path of the notes log for a scene
#[must_use]
pub fn log_path(scene: &ScenePath) -> PathBuf {
    scene.pub_directory().join(LOG_FILE_NAME)
}

/// The `"dev) vNNNN = pub) vNNNN, v9999"` summary for an executed plan
#[must_use]
pub fn version_summary(plan: &SyncPlan) -> String {
    format!("dev) {0} = pub) {0}, {1}", plan.version, Version::ALIAS)
}

/// Append an entry to the notes log, creating the file when missing
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn append(path: &Path, entry: &LogEntry) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SyncError::fs("open", path, e))?;

    let rule = "=".repeat(40);
    let block = format!(
        "{BOM}# {rule} #\n# user : {}\n# date : {}\n# memo : {}\n# version : {}\n# {rule} #\n",
        entry.worker, entry.date, entry.memo, entry.version_info,
    );

    file.write_all(block.as_bytes())
        .map_err(|e| SyncError::fs("write", path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::sync::SyncPlanner;

    fn sample_entry() -> LogEntry {
        LogEntry {
            worker: "jkhong".to_string(),
            date: "2026/08/07 10:30".to_string(),
            memo: "fixed the collar topology".to_string(),
            version_info: "dev) v0006 = pub) v0006, v9999".to_string(),
        }
    }

    #[test]
    fn test_log_path_sits_in_the_pub_directory() {
        let scene =
            ScenePath::parse(&PathBuf::from("/j/a/mdl/dev/scenes/env_a_mdl_v0001.ma")).unwrap();
        assert_eq!(
            log_path(&scene),
            PathBuf::from("/j/a/mdl/pub/scenes/log.txt")
        );
    }

    #[test]
    fn test_version_summary_format() {
        let tmp = TempDir::new().unwrap();
        let scene = ScenePath::parse(
            &tmp.path().join("a/mdl/dev/scenes/env_a_mdl_v0001.ma"),
        )
        .unwrap();
        fs::create_dir_all(scene.dev_directory()).unwrap();
        fs::write(scene.dev_directory().join("env_a_mdl_v0005.ma"), "x").unwrap();

        let plan = SyncPlanner::plan(&scene, false).unwrap();
        assert_eq!(version_summary(&plan), "dev) v0006 = pub) v0006, v9999");
    }

    #[test]
    fn test_append_writes_a_bordered_block() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("log.txt");

        append(&path, &sample_entry()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("\u{feff}# ======"));
        assert!(text.contains("# user : jkhong\n"));
        assert!(text.contains("# date : 2026/08/07 10:30\n"));
        assert!(text.contains("# memo : fixed the collar topology\n"));
        assert!(text.contains("# version : dev) v0006 = pub) v0006, v9999\n"));
    }

    #[test]
    fn test_each_appended_entry_carries_its_own_bom() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("log.txt");

        append(&path, &sample_entry()).unwrap();
        append(&path, &sample_entry()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches('\u{feff}').count(), 2);
        assert_eq!(text.matches("# user : jkhong").count(), 2);
    }
}
