//! Platform-aware data storage directory management
//!
//! ## Platform Paths
//!
//! | Type | Windows | macOS | Linux |
//! |------|---------|-------|-------|
//! | Data | `%APPDATA%\JobBoard\` | `~/Library/Application Support/JobBoard/` | `$XDG_DATA_HOME/jobboard/` |

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use super::config::{AppConfig, TransactionalBackend};
use super::constants::{APP_DOT_FOLDER, APP_NAME, ENV_DATA_DIR};
use crate::utils::file::expand_path;

/// Data subdirectories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSubdir {
    Sqlite,
}

impl DataSubdir {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataSubdir::Sqlite => "sqlite",
        }
    }

    /// Subdirectories required by the configured backend
    pub fn required_for(backend: TransactionalBackend) -> &'static [DataSubdir] {
        match backend {
            TransactionalBackend::Sqlite => &[DataSubdir::Sqlite],
            TransactionalBackend::Postgres => &[],
        }
    }
}

/// Application storage manager
#[derive(Debug, Clone)]
pub struct AppStorage {
    data_dir: PathBuf,
}

impl AppStorage {
    /// Initialize storage with platform-appropriate data directory
    pub async fn init(config: &AppConfig) -> Result<Self> {
        let data_dir = Self::resolve_data_dir();

        // canonicalize requires the path to exist
        Self::ensure_directories(&data_dir, DataSubdir::required_for(config.database.transactional))
            .await?;
        let data_dir = data_dir.canonicalize().unwrap_or(data_dir);

        tracing::debug!(data_dir = %data_dir.display(), "Storage initialized");
        Ok(Self { data_dir })
    }

    /// Resolve data directory from env var or platform default
    pub fn resolve_data_dir() -> PathBuf {
        Self::resolve_data_dir_from(std::env::var(ENV_DATA_DIR).ok())
    }

    fn resolve_data_dir_from(override_dir: Option<String>) -> PathBuf {
        if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
            return expand_path(&dir);
        }

        if let Some(proj_dirs) = ProjectDirs::from("", "", APP_NAME) {
            return proj_dirs.data_dir().to_path_buf();
        }

        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        cwd.join(APP_DOT_FOLDER)
    }

    async fn ensure_directories(data_dir: &Path, subdirs: &[DataSubdir]) -> Result<()> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        for subdir in subdirs {
            let path = data_dir.join(subdir.as_str());
            tokio::fs::create_dir_all(&path).await.with_context(|| {
                format!(
                    "Failed to create {} directory: {}",
                    subdir.as_str(),
                    path.display()
                )
            })?;
        }

        Ok(())
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get path to a subdirectory (canonicalized)
    pub fn subdir(&self, subdir: DataSubdir) -> PathBuf {
        let path = self.data_dir.join(subdir.as_str());
        path.canonicalize().unwrap_or(path)
    }

    /// Create AppStorage for testing with a specific data directory
    #[cfg(test)]
    pub fn init_for_test(data_dir: PathBuf) -> Self {
        std::fs::create_dir_all(data_dir.join(DataSubdir::Sqlite.as_str()))
            .expect("create test data directory");
        Self { data_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_subdir_as_str() {
        assert_eq!(DataSubdir::Sqlite.as_str(), "sqlite");
    }

    #[test]
    fn test_required_subdirs() {
        assert_eq!(
            DataSubdir::required_for(TransactionalBackend::Sqlite),
            &[DataSubdir::Sqlite]
        );
        assert!(DataSubdir::required_for(TransactionalBackend::Postgres).is_empty());
    }

    #[test]
    fn test_resolve_data_dir_override() {
        let path = AppStorage::resolve_data_dir_from(Some("/tmp/jobboard-data".to_string()));
        assert_eq!(path, PathBuf::from("/tmp/jobboard-data"));
    }

    #[test]
    fn test_resolve_data_dir_fallback() {
        let path = AppStorage::resolve_data_dir_from(None);
        assert!(!path.as_os_str().is_empty());

        let blank = AppStorage::resolve_data_dir_from(Some("  ".to_string()));
        assert_eq!(blank, path);
    }

    #[test]
    fn test_subdir_paths() {
        let dir = tempfile::tempdir().unwrap();
        let storage = AppStorage::init_for_test(dir.path().to_path_buf());
        assert!(storage.subdir(DataSubdir::Sqlite).ends_with("sqlite"));
        assert!(storage.subdir(DataSubdir::Sqlite).exists());
        assert_eq!(storage.data_dir(), dir.path());
    }
}
