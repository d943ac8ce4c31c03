/*
storage.rs

Copyright 2025 The Hexpath authors

This file is part of Hexpath.

Hexpath is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexpath is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexpath. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Key-value store in a JSON file.
//!
//! Values are strings, indexed by fixed keys. Every change is written to the disk immediately.

use log::{debug, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::{self, File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Object that stores the values in the `storage.json` file.
#[derive(Debug)]
pub struct Storage {
    /// Absolute path to the storage file.
    save_file: PathBuf,

    /// Values currently stored.
    values: BTreeMap<String, String>,
}

impl Storage {
    /// Create a [`Storage`] object and load the values from the disk.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the values are stored.
    /// A missing file gives an empty store. A file that cannot be read is deleted, and the store
    /// starts empty.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("storage.json");
        debug!("Storage file: {data_dir:?}");
        let values: BTreeMap<String, String> = match Self::load(&data_dir) {
            Ok(Some(v)) => v,
            Ok(None) => BTreeMap::new(),
            Err(error) => {
                warn!("Error reading {data_dir:?}: {error}");
                let _ = remove_file(&data_dir);
                BTreeMap::new()
            }
        };
        Self {
            save_file: data_dir,
            values,
        }
    }

    /// Read the storage file. Return None if the file does not exist.
    fn load(path: &Path) -> Result<Option<BTreeMap<String, String>>, Box<dyn Error>> {
        let file: File = match File::open(path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let values: BTreeMap<String, String> = serde_json::from_reader(reader)?;
        Ok(Some(values))
    }

    /// Write all the values to the storage file.
    fn flush(&self) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            fs::create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, &self.values)?;
        writer.flush()?;
        Ok(())
    }

    /// Return the value for the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set the value for the given key and save the store.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    /// Remove the value for the given key and save the store.
    pub fn remove(&mut self, key: &str) -> Result<(), Box<dyn Error>> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::env;
    use std::process;

    /// Return an empty directory for the given test.
    pub(crate) fn test_dir(name: &str) -> PathBuf {
        let mut dir: PathBuf = env::temp_dir();
        dir.push(format!("hexpath-test-{}-{name}", process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_file_gives_empty_store() {
        let storage = Storage::new(test_dir("missing"));
        assert_eq!(storage.get("streak"), None);
    }

    #[test]
    fn values_survive_a_reload() {
        let dir = test_dir("reload");
        let mut storage = Storage::new(dir.clone());
        storage.set("streak", "4").unwrap();
        storage.set("dailyGameCompleted", "true").unwrap();
        storage.remove("dailyGameCompleted").unwrap();

        let storage = Storage::new(dir.clone());
        assert_eq!(storage.get("streak"), Some("4"));
        assert_eq!(storage.get("dailyGameCompleted"), None);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn corrupt_file_is_discarded() {
        let dir = test_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("storage.json"), "{not json").unwrap();
        let storage = Storage::new(dir.clone());
        assert_eq!(storage.get("streak"), None);
        assert!(!dir.join("storage.json").exists());
        let _ = fs::remove_dir_all(dir);
    }
}
