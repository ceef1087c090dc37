//! Read-only user store loaded once at start-up from a JSON array.

use crate::model::User;
use std::{fs, path::Path, sync::Arc};
use tracing::{error, info};

#[derive(Clone, Debug, Default)]
pub struct UserStore {
    users: Arc<Vec<User>>,
}

impl UserStore {
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }

    /// Loads users from `path`. A missing or invalid file is logged and yields an empty store.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                error!(
                    "{} could not be read: {err}. Using empty user list.",
                    path.display()
                );
                return Self::default();
            }
        };

        match serde_json::from_str::<Vec<User>>(&contents) {
            Ok(users) => {
                info!(
                    "Successfully loaded {} users from {}",
                    users.len(),
                    path.display()
                );
                Self::new(users)
            }
            Err(err) => {
                error!(
                    "Invalid JSON in {}: {err}. Using empty user list.",
                    path.display()
                );
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn all(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn find(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = std::env::temp_dir().join(format!(
            "userdir-{}-{}-{name}",
            std::process::id(),
            ulid::Ulid::new()
        ));
        fs::write(&path, contents)?;
        Ok(path)
    }

    #[test]
    fn load_reads_users() -> anyhow::Result<()> {
        let path = temp_file(
            "users.json",
            r#"[{"id": 1, "name": "Ann", "email": "ann@example.com", "age": 30}]"#,
        )?;
        let store = UserStore::load(&path);
        fs::remove_file(&path)?;

        assert_eq!(store.all().len(), 1);
        assert_eq!(store.find(1).map(|user| user.name.as_str()), Some("Ann"));
        assert!(store.find(2).is_none());
        Ok(())
    }

    #[test]
    fn load_missing_file_is_empty() {
        let store = UserStore::load(Path::new("/nonexistent/userdir/users.json"));
        assert!(store.all().is_empty());
    }

    #[test]
    fn load_invalid_json_is_empty() -> anyhow::Result<()> {
        let path = temp_file("broken.json", "{ not json")?;
        let store = UserStore::load(&path);
        fs::remove_file(&path)?;

        assert!(store.all().is_empty());
        Ok(())
    }
}
