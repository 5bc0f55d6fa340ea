//! Progress persistence
//!
//! The record is a small JSON document:
//!
//! ```json
//! {"unlocked_level": 3, "level_stars": {"1": 3, "2": 1}}
//! ```
//!
//! Reading never fails: a missing file is a fresh start and a corrupt one is
//! logged and replaced by defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::progression::Progress;

/// Parse a progress record, falling back to defaults on any error
pub fn from_json(text: &str) -> Progress {
    match serde_json::from_str::<Progress>(text) {
        Ok(mut progress) => {
            progress.sanitize();
            progress
        }
        Err(e) => {
            warn!("[Store] corrupt progress record, starting fresh: {}", e);
            Progress::default()
        }
    }
}

pub fn to_json(progress: &Progress) -> Result<String> {
    serde_json::to_string_pretty(progress).context("serialize progress")
}

/// Load progress from `path`
pub fn load(path: &Path) -> Progress {
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!("[Store] loaded progress from {}", path.display());
            from_json(&text)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Progress::default(),
        Err(e) => {
            warn!("[Store] cannot read {}: {}", path.display(), e);
            Progress::default()
        }
    }
}

/// Write progress to `path`, replacing the previous file
pub fn save(path: &Path, progress: &Progress) -> Result<()> {
    let text = to_json(progress)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, text).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    debug!("[Store] saved progress to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_documented_shape() {
        let p = from_json(r#"{"unlocked_level": 3, "level_stars": {"1": 3, "2": 1}}"#);
        assert_eq!(p.unlocked_level, 3);
        assert_eq!(p.stars(1), 3);
        assert_eq!(p.stars(2), 1);
        assert_eq!(p.stars(3), 0);
    }

    #[test]
    fn test_corrupt_falls_back() {
        assert_eq!(from_json("{not json"), Progress::default());
        assert_eq!(from_json(r#"{"unlocked_level": "x"}"#), Progress::default());
    }

    #[test]
    fn test_missing_fields_default() {
        let p = from_json(r#"{"level_stars": {"1": 2}}"#);
        assert_eq!(p.unlocked_level, 1);
        assert_eq!(p.stars(1), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let mut p = Progress::default();
        p.record_win(1, 2);
        p.record_win(2, 3);
        let text = to_json(&p).unwrap();
        assert_eq!(from_json(&text), p);
    }
}
