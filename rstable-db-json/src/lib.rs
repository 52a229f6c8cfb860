//! The restaurant collection stored as a single JSON file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::anyhow;
use parking_lot::Mutex;
use rstable_boundary as json;
use rstable_core::{
    entities::Restaurant,
    repositories::{Error as RepoError, RestaurantRepo},
};

type Result<T> = std::result::Result<T, RepoError>;

#[derive(Debug)]
pub struct JsonFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the records as they are stored.
    ///
    /// Entries that are not JSON objects are skipped, fields
    /// that are missing or invalid fall back to their defaults.
    pub fn load_records(&self) -> Result<Vec<json::Restaurant>> {
        let data = fs::read(&self.path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => RepoError::NotFound,
            _ => RepoError::Io(err),
        })?;
        let values: Vec<serde_json::Value> = serde_json::from_slice(&data)
            .map_err(|err| anyhow!("Invalid JSON file {}: {err}", self.path.display()))?;
        let records = values
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| {
                if !value.is_object() {
                    log::warn!("Skipping record #{i}: not a JSON object");
                    return None;
                }
                match serde_json::from_value::<json::Restaurant>(value) {
                    Ok(record) => Some(record),
                    Err(err) => {
                        log::warn!("Skipping malformed record #{i}: {err}");
                        None
                    }
                }
            })
            .collect();
        Ok(records)
    }

    /// Replace the file with the given records.
    ///
    /// The records are written to a temporary file next to the
    /// target that is then renamed, so readers never see a
    /// partially written file.
    pub fn store_records(&self, records: &[json::Restaurant]) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut data = serde_json::to_vec_pretty(records).map_err(anyhow::Error::from)?;
        data.push(b'\n');
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, &data)?;
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        log::debug!(
            "Stored {} restaurants in {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "restaurants.json".into());
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

impl RestaurantRepo for JsonFile {
    fn all_restaurants(&self) -> Result<Vec<Restaurant>> {
        let records = self.load_records()?;
        Ok(records.into_iter().map(Restaurant::from).collect())
    }

    fn replace_all_restaurants(&self, restaurants: &[Restaurant]) -> Result<()> {
        let records: Vec<_> = restaurants
            .iter()
            .cloned()
            .map(json::Restaurant::from)
            .collect();
        self.store_records(&records)
    }
}
