use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File name of the persisted session token inside the config directory.
pub const TOKEN_FILE: &str = "token";

/// Session token persisted between runs.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store the token in the given directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(TOKEN_FILE),
        }
    }

    /// Load the stored token, if any.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read token file: {:?}", self.path))?;
        let token = content.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }

    /// Persist the token with owner-only permissions.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create token directory: {:?}", parent))?;
        }

        std::fs::write(&self.path, token)
            .with_context(|| format!("Failed to write token file: {:?}", self.path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)
                .with_context(|| format!("Failed to get file metadata: {:?}", self.path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", self.path))?;
        }

        Ok(())
    }

    /// Remove the stored token.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove token file: {:?}", self.path))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_token() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::in_dir(temp_dir.path());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_load_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::in_dir(&temp_dir.path().join("nested"));

        store.save("abc.def.ghi").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc.def.ghi"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::in_dir(temp_dir.path());
        store.save("secret").unwrap();

        let mode = std::fs::metadata(temp_dir.path().join(TOKEN_FILE))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
