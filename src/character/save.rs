use super::player::Player;
use crate::core::constants::SAVE_VERSION_MAGIC;
use crate::core::error::SaveError;
use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a character is persisted between sessions.
pub trait Storage {
    fn save(&self, player: &Player) -> Result<(), SaveError>;

    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Player>, SaveError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct SaveFile {
    player: Player,
    saved_at: i64,
}

/// Manages saving and loading the character with a checksummed binary format
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager in the platform config directory.
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs =
            ProjectDirs::from("", "", "elemental-odyssey").ok_or(SaveError::NoConfigDir)?;
        Self::in_dir(project_dirs.config_dir())
    }

    /// Creates a SaveManager writing `save.dat` under `dir`.
    pub fn in_dir(dir: &Path) -> Result<Self, SaveError> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            save_path: dir.join("save.dat"),
        })
    }

    /// Creates a SaveManager for testing with a unique temporary directory
    #[cfg(test)]
    fn new_for_test() -> Result<Self, SaveError> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "odyssey-test-{}-{}",
            std::process::id(),
            test_id
        ));
        Self::in_dir(&temp_dir)
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the save file.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - bincode payload (variable length)
    /// - SHA256 checksum over the three fields above (32 bytes)
    fn write(&self, player: &Player) -> Result<(), SaveError> {
        let record = SaveFile {
            player: player.clone(),
            saved_at: Utc::now().timestamp(),
        };
        let data =
            bincode::serialize(&record).map_err(|e| SaveError::Serialization(e.to_string()))?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        debug!(path = %self.save_path.display(), bytes = data.len(), "saved character");
        Ok(())
    }

    /// Reads and verifies the save file.
    fn read(&self) -> Result<SaveFile, SaveError> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(SaveError::Version {
                expected: SAVE_VERSION_MAGIC,
                found: version,
            });
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        if stored_checksum != hasher.finalize().as_slice() {
            return Err(SaveError::Checksum);
        }

        bincode::deserialize(&data).map_err(|e| SaveError::Serialization(e.to_string()))
    }

    /// Unix timestamp of the last save, if one exists.
    pub fn last_saved_at(&self) -> Result<Option<i64>, SaveError> {
        match self.read() {
            Ok(record) => Ok(Some(record.saved_at)),
            Err(SaveError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl Storage for SaveManager {
    fn save(&self, player: &Player) -> Result<(), SaveError> {
        self.write(player)
    }

    fn load(&self) -> Result<Option<Player>, SaveError> {
        match self.read() {
            Ok(record) => Ok(Some(record.player)),
            Err(SaveError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::player::create_player;
    use crate::character::progression::apply_victory_rewards;

    #[test]
    fn test_save_and_load() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");

        let mut original = create_player("paladin", 0).unwrap();
        apply_victory_rewards(&mut original, 120, 300);
        original.win_streak = 4;

        manager.save(&original).expect("Failed to save");
        assert!(manager.save_exists());

        let loaded = manager.load().expect("Failed to load").expect("missing save");
        assert_eq!(loaded, original);
        assert!(manager.last_saved_at().unwrap().is_some());

        fs::remove_file(manager.save_path()).expect("Failed to remove save file");
    }

    #[test]
    fn test_load_nonexistent() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");
        assert!(manager.load().unwrap().is_none());
        assert!(manager.last_saved_at().unwrap().is_none());
    }

    #[test]
    fn test_corrupted_save_fails_checksum() {
        let manager = SaveManager::new_for_test().unwrap();
        manager.save(&create_player("necro", 0).unwrap()).unwrap();

        let mut bytes = fs::read(manager.save_path()).unwrap();
        let mid = bytes.len() / 2;
        bytes[mid] ^= 0xFF;
        fs::write(manager.save_path(), &bytes).unwrap();

        assert!(matches!(manager.load(), Err(SaveError::Checksum)));
    }

    #[test]
    fn test_wrong_version_rejected() {
        let manager = SaveManager::new_for_test().unwrap();
        manager.save(&create_player("necro", 0).unwrap()).unwrap();

        let mut bytes = fs::read(manager.save_path()).unwrap();
        bytes[0] ^= 0x01;
        fs::write(manager.save_path(), &bytes).unwrap();

        assert!(matches!(manager.load(), Err(SaveError::Version { .. })));
    }
}
