use crate::errors::StorageError;
use std::{fs, io::ErrorKind, path::Path, path::PathBuf};

/// `read` returns `Ok(None)` when nothing has been written yet.
pub trait SlotStorage {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&mut self, payload: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SlotStorage for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, payload: &str) -> Result<(), StorageError> {
        // Readers see either the old list or the new one, never a partial write.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SlotStorage for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("reads disabled".into()));
        }
        Ok(self.value.clone())
    }

    fn write(&mut self, payload: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("quota exceeded".into()));
        }
        self.value = Some(payload.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_path() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("goal_tracker_slot_{}_{}.json", std::process::id(), nanos));
        path
    }

    #[test]
    fn file_slot_missing_file_reads_as_empty() {
        let slot = FileSlot::new(unique_path());
        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn file_slot_overwrites_previous_contents() {
        let path = unique_path();
        let mut slot = FileSlot::new(&path);
        slot.write("[1,2,3]").unwrap();
        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
        assert!(!path.with_extension("json.tmp").exists());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn file_slot_write_into_missing_directory_fails() {
        let mut path = unique_path();
        path.push("nested");
        path.push("goals.json");
        let mut slot = FileSlot::new(path);
        assert!(matches!(slot.write("[]"), Err(StorageError::Io(_))));
    }

    #[test]
    fn memory_slot_simulates_failures() {
        let slot = MemorySlot::with_value("[]").failing_reads();
        assert!(slot.read().is_err());

        let mut slot = MemorySlot::new().failing_writes();
        assert!(slot.write("[]").is_err());
        assert_eq!(slot.value(), None);
        assert_eq!(slot.writes(), 0);

        slot.set_fail_writes(false);
        slot.write("[]").unwrap();
        assert_eq!(slot.value(), Some("[]"));
        assert_eq!(slot.writes(), 1);
    }
}
