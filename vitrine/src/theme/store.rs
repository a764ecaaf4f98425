//! Persistence of the theme preference.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use directories::ProjectDirs;

use super::Theme;
use crate::error::ThemeStoreError;

/// Where the chosen theme is remembered between visits.
pub trait ThemeStore: Send + Sync {
    /// The stored theme, if one was saved.
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError>;

    /// Remember a theme.
    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError>;
}

/// Keeps the preference in memory only.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: RwLock<Option<Theme>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: RwLock::new(Some(theme)),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        Ok(self.theme.read().map(|guard| *guard).unwrap_or_default())
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        let mut guard = self.theme.write().map_err(|_| ThemeStoreError::Unavailable)?;
        *guard = Some(theme);
        Ok(())
    }
}

/// Storage that is never available, like a sandboxed page without
/// `localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoThemeStore;

impl ThemeStore for NoThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        Err(ThemeStoreError::Unavailable)
    }

    fn save(&self, _theme: Theme) -> Result<(), ThemeStoreError> {
        Err(ThemeStoreError::Unavailable)
    }
}

/// Stores the theme name in a small text file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `theme` in the user's config directory for vitrine.
    pub fn in_config_dir() -> Option<Self> {
        let dirs = ProjectDirs::from("dev", "vitrine", "vitrine")?;
        Some(Self::new(dirs.config_dir().join("theme")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Theme::parse(text.trim())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, theme.as_str())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryThemeStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Light));
    }

    #[test]
    fn test_no_store_is_unavailable() {
        assert!(matches!(NoThemeStore.load(), Err(ThemeStoreError::Unavailable)));
        assert!(matches!(NoThemeStore.save(Theme::Dark), Err(ThemeStoreError::Unavailable)));
    }

    #[test]
    fn test_file_store() {
        let dir = std::env::temp_dir().join(format!("vitrine-theme-{}", uuid::Uuid::new_v4()));
        let store = FileThemeStore::new(dir.join("nested").join("theme"));

        assert_eq!(store.load().unwrap(), None);
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Light));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "light");

        std::fs::write(store.path(), "sepia").unwrap();
        assert_eq!(store.load().unwrap(), None);

        let _ = std::fs::remove_dir_all(dir);
    }
}
