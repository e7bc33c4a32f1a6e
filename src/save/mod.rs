//! JSON persistence: save slots, the active-slot pointer, and the combat
//! history ledger.
//!
//! Layout under the data directory:
//!   {uuid}.json   - one save slot per file
//!   active.json   - uuid of the slot currently being played
//!   history.json  - append-only list of finished bouts

use crate::character::{Character, CombatOutcome};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("save data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("no platform data directory available")]
    NoDataDir,
    #[error("no active save")]
    NoActiveSave,
    #[error("save '{0}' not found")]
    SaveNotFound(Uuid),
}

/// One playthrough: a character plus bookkeeping timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveSlot {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub character: Character,
}

/// A finished bout as recorded for the history screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombatHistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub player_name: String,
    pub opponent_name: String,
    pub result: CombatOutcome,
    pub arena: String,
    pub turns: u32,
    pub player_level: u32,
    pub opponent_level: u32,
}

/// Owns the save directory. All reads and writes go through here; the game
/// core itself never touches the filesystem.
pub struct SaveManager {
    data_dir: PathBuf,
}

impl SaveManager {
    /// Uses the platform data directory (e.g. `~/.local/share/dohyo`).
    pub fn new() -> Result<Self, SaveError> {
        let dirs = ProjectDirs::from("", "", "dohyo").ok_or(SaveError::NoDataDir)?;
        Self::with_dir(dirs.data_dir())
    }

    /// Uses an explicit directory, creating it if needed.
    pub fn with_dir(dir: impl AsRef<Path>) -> Result<Self, SaveError> {
        let data_dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn slot_path(&self, id: Uuid) -> PathBuf {
        self.data_dir.join(format!("{id}.json"))
    }

    fn active_path(&self) -> PathBuf {
        self.data_dir.join("active.json")
    }

    fn history_path(&self) -> PathBuf {
        self.data_dir.join("history.json")
    }

    /// Creates a new slot for the character and makes it the active one.
    pub fn create_save(&self, character: Character) -> Result<SaveSlot, SaveError> {
        let now = Utc::now();
        let slot = SaveSlot {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            character,
        };
        self.write_slot(&slot)?;
        self.set_active(slot.id)?;
        Ok(slot)
    }

    /// Persists an updated character into an existing slot, bumping
    /// `updated_at`.
    pub fn update_save(&self, id: Uuid, character: Character) -> Result<SaveSlot, SaveError> {
        let mut slot = self.load_save(id)?;
        slot.character = character;
        slot.updated_at = Utc::now();
        self.write_slot(&slot)?;
        Ok(slot)
    }

    pub fn load_save(&self, id: Uuid) -> Result<SaveSlot, SaveError> {
        let path = self.slot_path(id);
        if !path.exists() {
            return Err(SaveError::SaveNotFound(id));
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// All slots, newest first.
    pub fn list_saves(&self) -> Result<Vec<SaveSlot>, SaveError> {
        let mut slots = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            let stem = path.file_stem().and_then(|s| s.to_str());
            let id = match stem.and_then(|s| Uuid::parse_str(s).ok()) {
                Some(id) if path.extension().is_some_and(|e| e == "json") => id,
                _ => continue,
            };
            slots.push(self.load_save(id)?);
        }
        slots.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(slots)
    }

    /// Removes a slot; clears the active pointer if it pointed here.
    pub fn delete_save(&self, id: Uuid) -> Result<(), SaveError> {
        let path = self.slot_path(id);
        if !path.exists() {
            return Err(SaveError::SaveNotFound(id));
        }
        fs::remove_file(path)?;
        if self.active_id()?.map_or(false, |active| active == id) {
            fs::remove_file(self.active_path())?;
        }
        Ok(())
    }

    pub fn set_active(&self, id: Uuid) -> Result<(), SaveError> {
        if !self.slot_path(id).exists() {
            return Err(SaveError::SaveNotFound(id));
        }
        fs::write(self.active_path(), serde_json::to_string(&id)?)?;
        Ok(())
    }

    fn active_id(&self) -> Result<Option<Uuid>, SaveError> {
        let path = self.active_path();
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    /// The slot currently being played.
    pub fn active_save(&self) -> Result<SaveSlot, SaveError> {
        let id = self.active_id()?.ok_or(SaveError::NoActiveSave)?;
        self.load_save(id)
    }

    /// Appends one bout to the history ledger.
    pub fn record_history(&self, entry: CombatHistoryEntry) -> Result<(), SaveError> {
        let mut entries = self.history()?;
        entries.push(entry);
        fs::write(self.history_path(), serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }

    /// Recorded bouts in insertion order; empty when nothing has been fought.
    pub fn history(&self) -> Result<Vec<CombatHistoryEntry>, SaveError> {
        let path = self.history_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn clear_history(&self) -> Result<(), SaveError> {
        let path = self.history_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn write_slot(&self, slot: &SaveSlot) -> Result<(), SaveError> {
        fs::write(
            self.slot_path(slot.id),
            serde_json::to_string_pretty(slot)?,
        )?;
        Ok(())
    }
}
