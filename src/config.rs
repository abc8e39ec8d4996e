//! Per-program configuration directory.
//!
//! The framework does not define the directory's contents; it only locates
//! (and on demand creates) `~/.{program}` for collaborators to use.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// The program's configuration directory under the user's home.
///
/// Returns `None` when no home directory can be determined.
pub fn config_dir(program: &str) -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(format!(".{}", program)))
}

/// Like [`config_dir`], but creates the directory if missing.
pub fn ensure_config_dir(program: &str) -> Result<Option<PathBuf>> {
    match config_dir(program) {
        Some(dir) => {
            fs::create_dir_all(&dir)?;
            Ok(Some(dir))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_is_hidden_under_home() {
        if let Some(dir) = config_dir("cairn-test") {
            let name = dir.file_name().unwrap().to_string_lossy().into_owned();
            assert_eq!(name, ".cairn-test");
            assert!(dir.starts_with(dirs::home_dir().unwrap()));
        }
    }

    #[test]
    fn config_dir_differs_per_program() {
        let a = config_dir("alpha");
        let b = config_dir("beta");
        if let (Some(a), Some(b)) = (a, b) {
            assert_ne!(a, b);
        }
    }
}
