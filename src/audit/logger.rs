//! Audit logger for append-only audit log
//!
//! Appends one JSON line per change and reads back the most recent ones for
//! the `history` command.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;

use crate::error::{ContactError, ContactResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file
///
/// The log file uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one audit entry.
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry and flush it
    pub fn log(&self, entry: &AuditEntry) -> ContactResult<()> {
        if let Some(parent) = self.log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ContactError::Io(format!("Failed to create audit log directory: {}", e))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ContactError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| ContactError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| ContactError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| ContactError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// The last `count` entries, oldest first
    ///
    /// A log that was never written reads as empty. Only the requested tail
    /// is kept in memory while the file is scanned.
    pub fn read_recent(&self, count: usize) -> ContactResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ContactError::Io(format!("Failed to open audit log: {}", e))),
        };

        let mut tail = VecDeque::with_capacity(count.min(64));
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                ContactError::Io(format!("Failed to read audit log line {}: {}", index + 1, e))
            })?;
            if line.trim().is_empty() || count == 0 {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                ContactError::Json(format!("Bad audit entry on line {}: {}", index + 1, e))
            })?;

            if tail.len() == count {
                tail.pop_front();
            }
            tail.push_back(entry);
        }

        Ok(tail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path);
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = AuditEntry::create(EntityType::Phone, "Ann", &"1111111111");

        logger.log(&entry).unwrap();

        let entries = logger.read_recent(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].contact, "Ann");
    }

    #[test]
    fn test_read_recent_keeps_the_tail() {
        let (logger, _temp) = create_test_logger();

        for i in 0..10 {
            let entry = AuditEntry::create(EntityType::Contact, format!("contact-{}", i), &i);
            logger.log(&entry).unwrap();
        }

        let names: Vec<_> = logger
            .read_recent(3)
            .unwrap()
            .into_iter()
            .map(|entry| entry.contact)
            .collect();
        assert_eq!(names, vec!["contact-7", "contact-8", "contact-9"]);
        assert!(logger.read_recent(0).unwrap().is_empty());
        assert_eq!(logger.read_recent(100).unwrap().len(), 10);
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let (logger, _temp) = create_test_logger();

        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_bad_line_is_reported() {
        let (logger, temp) = create_test_logger();
        logger
            .log(&AuditEntry::create(EntityType::Contact, "Ann", &"Ann"))
            .unwrap();
        let mut file = OpenOptions::new()
            .append(true)
            .open(temp.path().join("audit.log"))
            .unwrap();
        writeln!(file, "not json").unwrap();

        let err = logger.read_recent(5).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("audit.log");
        let logger = AuditLogger::new(log_path.clone());

        logger
            .log(&AuditEntry::create(EntityType::Contact, "Ann", &"Ann"))
            .unwrap();
        assert!(log_path.exists());
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        logger
            .log(&AuditEntry::delete(EntityType::Phone, "Ann", &"1111111111"))
            .unwrap();

        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        let entries = reopened.read_recent(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Delete);
    }
}
