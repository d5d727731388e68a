use crate::model::Item;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreScope {
    Project,
    Global,
}

#[derive(Debug, Clone)]
pub struct StoreLocation {
    pub path: PathBuf,
    pub scope: StoreScope,
}

pub fn init_project_store() -> Result<StoreLocation> {
    let cwd = env::current_dir()?;
    let dir = cwd.join(".shelflife");
    fs::create_dir_all(&dir).context("failed to create .shelflife directory")?;
    let location = StoreLocation {
        path: dir.join("items.json"),
        scope: StoreScope::Project,
    };
    if !location.path.exists() {
        save_items(&location, &[])?;
    }
    Ok(location)
}

/// Walks up from `start` looking for a project store; falls back to the
/// per-user data directory.
pub fn locate_store(start: &Path) -> Result<StoreLocation> {
    if let Some(path) = find_project_store(start) {
        return Ok(StoreLocation {
            path,
            scope: StoreScope::Project,
        });
    }
    Ok(StoreLocation {
        path: global_store_path()?,
        scope: StoreScope::Global,
    })
}

/// Reads the full item list. A missing file, an unreadable file, or
/// malformed JSON all yield an empty list; loading never fails outward.
pub fn load_items(location: &StoreLocation) -> Vec<Item> {
    fs::read_to_string(&location.path)
        .ok()
        .and_then(|data| serde_json::from_str(&data).ok())
        .unwrap_or_default()
}

/// Serializes the full list on every call; callers invoke this after each
/// mutation rather than diffing.
pub fn save_items(location: &StoreLocation, items: &[Item]) -> Result<()> {
    if let Some(parent) = location.path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
    }
    let serialized = serde_json::to_string_pretty(items).context("serializing items")?;
    fs::write(&location.path, serialized)
        .with_context(|| format!("writing {:?}", location.path))?;
    Ok(())
}

fn find_project_store(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        let candidate = current.join(".shelflife/items.json");
        if candidate.exists() {
            return Some(candidate);
        }
        dir = current.parent();
    }
    None
}

fn global_store_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "shelflife").context("locating data directory")?;
    Ok(dirs.data_dir().join("items.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Pantry;

    fn temp_location(dir: &tempfile::TempDir) -> StoreLocation {
        StoreLocation {
            path: dir.path().join("items.json"),
            scope: StoreScope::Project,
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_items(&temp_location(&dir)).is_empty());
    }

    #[test]
    fn malformed_json_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let location = temp_location(&dir);
        fs::write(&location.path, "{not json").unwrap();
        assert!(load_items(&location).is_empty());
        fs::write(&location.path, r#"[{"id":"x"}]"#).unwrap();
        assert!(load_items(&location).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let location = temp_location(&dir);
        let mut pantry = Pantry::default();
        let added = pantry.add("Milk", "2024-01-05").unwrap();
        save_items(&location, pantry.items()).unwrap();

        let loaded = load_items(&location);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, added.id);
        assert_eq!(loaded[0].name, "Milk");
        assert_eq!(loaded[0].date.to_string(), "2024-01-05");
    }

    #[test]
    fn save_of_loaded_list_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let location = temp_location(&dir);
        let mut pantry = Pantry::default();
        pantry.add("Milk", "2024-01-05").unwrap();
        pantry.add("Eggs", "2024-01-02").unwrap();
        save_items(&location, pantry.items()).unwrap();

        let first = fs::read_to_string(&location.path).unwrap();
        let loaded = load_items(&location);
        save_items(&location, &loaded).unwrap();
        let second = fs::read_to_string(&location.path).unwrap();
        assert_eq!(first, second);
    }
}
