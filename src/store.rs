use crate::errors::StoreError;
use crate::models::DiaryEntry;
use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::{env, path::Path, path::PathBuf};

/// Sole gateway to the relational store. Every handler goes through these
/// methods; none of them issue SQL of their own.
pub struct DiaryStore {
    conn: Connection,
}

impl DiaryStore {
    /// Opens (creating if needed) the database at `path` and applies the
    /// bootstrap schema. The DDL is idempotent, so opening an existing
    /// database is the same call.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    /// All entries, newest id first.
    pub fn list(&self) -> Result<Vec<DiaryEntry>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, content, created_at, updated_at FROM entries ORDER BY id DESC",
        )?;
        let entries = stmt
            .query_map([], row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<DiaryEntry>, StoreError> {
        let entry = self
            .conn
            .query_row(
                "SELECT id, date, content, created_at, updated_at FROM entries WHERE id = ?1",
                params![id],
                row_to_entry,
            )
            .optional()?;
        Ok(entry)
    }

    pub fn find_by_date(&self, date: NaiveDate) -> Result<Option<DiaryEntry>, StoreError> {
        let entry = self
            .conn
            .query_row(
                "SELECT id, date, content, created_at, updated_at FROM entries WHERE date = ?1",
                params![date],
                row_to_entry,
            )
            .optional()?;
        Ok(entry)
    }

    /// Inserts a new entry with both timestamps set to now. A second entry
    /// for the same date violates the UNIQUE constraint and comes back as
    /// `StoreError::Database`.
    pub fn create(&self, date: NaiveDate, content: &str) -> Result<DiaryEntry, StoreError> {
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO entries (date, content, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![date, content, now, now],
        )?;
        Ok(DiaryEntry {
            id: self.conn.last_insert_rowid(),
            date,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rewrites `content` and bumps `updated_at`. Fails with
    /// `StoreError::RowNotFound` when `id` matches nothing.
    pub fn update_content(&self, id: i64, content: &str) -> Result<DiaryEntry, StoreError> {
        let changed = self.conn.execute(
            "UPDATE entries SET content = ?1, updated_at = ?2 WHERE id = ?3",
            params![content, Utc::now(), id],
        )?;
        if changed == 0 {
            return Err(StoreError::RowNotFound(id));
        }
        self.find_by_id(id)?.ok_or(StoreError::RowNotFound(id))
    }

    /// Fails with `StoreError::RowNotFound` when `id` matches nothing.
    pub fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(StoreError::RowNotFound(id));
        }
        Ok(())
    }

    /// Delete-many semantics: removing zero rows is still success. Returns
    /// the number of rows removed (0 or 1, given the date uniqueness).
    pub fn delete_by_date(&self, date: NaiveDate) -> Result<usize, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM entries WHERE date = ?1", params![date])?;
        Ok(removed)
    }
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<DiaryEntry> {
    Ok(DiaryEntry {
        id: row.get(0)?,
        date: row.get(1)?,
        content: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

pub fn resolve_db_path() -> PathBuf {
    if let Ok(path) = env::var("DIARY_DB_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/diary.db")
}
