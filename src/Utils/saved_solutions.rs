//! Store of saved solutions: `{id, kind, data, timestamp}` records kept in a TOML file and
//! returned exactly as they were stored.
use chrono::Utc;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ID_LENGTH: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedSolution {
    pub id: String,
    /// calculator the record comes from, e.g. "quadratic"
    pub kind: String,
    /// milliseconds since the Unix epoch
    pub timestamp: i64,
    pub data: toml::Table,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct SolutionFile {
    #[serde(default)]
    solutions: Vec<SavedSolution>,
}

/// random 9-character base-36 identifier
pub fn new_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LENGTH)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

pub struct SolutionStore {
    path: PathBuf,
}

impl SolutionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        SolutionStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read(&self) -> Result<SolutionFile, Box<dyn std::error::Error>> {
        if !self.path.exists() {
            return Ok(SolutionFile::default());
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&text)?)
    }

    fn write(&self, file: &SolutionFile) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(&self.path, toml::to_string(file)?)?;
        Ok(())
    }

    /// appends a record with a fresh id and the current time, returns the stored record
    pub fn save(
        &self,
        kind: &str,
        data: toml::Table,
    ) -> Result<SavedSolution, Box<dyn std::error::Error>> {
        let mut file = self.read()?;
        let record = SavedSolution {
            id: new_id(),
            kind: kind.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            data,
        };
        file.solutions.push(record.clone());
        self.write(&file)?;
        info!("saved {} solution {} to {}", kind, record.id, self.path.display());
        Ok(record)
    }

    pub fn list(&self) -> Result<Vec<SavedSolution>, Box<dyn std::error::Error>> {
        Ok(self.read()?.solutions)
    }

    pub fn get(&self, id: &str) -> Result<Option<SavedSolution>, Box<dyn std::error::Error>> {
        Ok(self.read()?.solutions.into_iter().find(|s| s.id == id))
    }

    /// true when a record was removed
    pub fn delete(&self, id: &str) -> Result<bool, Box<dyn std::error::Error>> {
        let mut file = self.read()?;
        let before = file.solutions.len();
        file.solutions.retain(|s| s.id != id);
        let removed = file.solutions.len() != before;
        if removed {
            self.write(&file)?;
        }
        Ok(removed)
    }
}
