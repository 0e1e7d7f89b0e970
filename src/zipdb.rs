//! SQLite-backed zip-code database.
//!
//! Reads the `simple_zipcode` table layout used by the uszipcode project:
//! one row per zip with at least `zipcode`, `state` and `major_city`.

use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

use crate::error::LookupError;
use crate::metro::ZipDatabase;
use crate::models::ZipInfo;

const LOOKUP_SQL: &str = "SELECT state, major_city FROM simple_zipcode WHERE zipcode = ?1";

pub struct SqliteZipDatabase {
    conn: Mutex<Connection>,
}

impl SqliteZipDatabase {
    /// Open an existing database read-only.
    pub fn open(path: &Path) -> Result<Self, LookupError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Self::from_connection(conn)
    }

    pub fn from_connection(conn: Connection) -> Result<Self, LookupError> {
        // Fail at startup rather than on the first record if the table is missing.
        conn.prepare(LOOKUP_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl ZipDatabase for SqliteZipDatabase {
    fn lookup(&self, zipcode: &str) -> Result<Option<ZipInfo>, LookupError> {
        let conn = self
            .conn
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut stmt = conn.prepare_cached(LOOKUP_SQL)?;
        let info = stmt
            .query_row([zipcode], |row| {
                let state: Option<String> = row.get(0)?;
                let major_city: Option<String> = row.get(1)?;
                Ok(ZipInfo {
                    state: state.unwrap_or_default(),
                    major_city: major_city.unwrap_or_default(),
                })
            })
            .optional()?;
        Ok(info)
    }
}
