use anyhow::anyhow;
use rusqlite::{OptionalExtension, Row, params};

use crate::{
    config,
    domain::music::{Music, MusicDraft},
    storage::{
        db,
        error::StorageError,
        schema::{columns, tables},
    },
};

use columns::*;
use tables::*;

/// Main structure that implements all storage logic
pub struct Storage {
    pub(crate) db: rusqlite::Connection,
}

fn music_from_row(row: &Row<'_>) -> rusqlite::Result<Music> {
    Ok(Music {
        id: row.get(0)?,
        title: row.get(1)?,
        cover: row.get(2)?,
        artist: row.get(3)?,
        url: row.get(4)?,
    })
}

impl Storage {
    /// when called, opens a database connection
    pub fn new(db_config: &config::Database) -> Result<Self, StorageError> {
        let db: rusqlite::Connection = db::open(db_config)?;
        Ok(Self::from_existing_conn(db))
    }

    pub fn from_existing_conn(db: rusqlite::Connection) -> Self {
        Self { db }
    }

    /// Returns all rows in storage order. Empty vec if the table is empty.
    pub fn list_all(&mut self) -> Result<Vec<Music>, StorageError> {
        let mut stmt = self.db.prepare(&format!(
            "SELECT {ID}, {TITLE}, {COVER}, {ARTIST}, {URL} FROM {MUSIC}"
        ))?;

        let musics = stmt
            .query_map([], music_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(musics)
    }

    /// Returns the matching row, or `None` if the id is absent.
    pub fn get_by_id(&mut self, id: i32) -> Result<Option<Music>, StorageError> {
        let mut stmt = self.db.prepare(&format!(
            "SELECT {ID}, {TITLE}, {COVER}, {ARTIST}, {URL} FROM {MUSIC} WHERE {ID} = ?1"
        ))?;

        Ok(stmt.query_row(params![id], music_from_row).optional()?)
    }

    /// Stores a new row and returns the generated id.
    pub fn insert(&mut self, draft: &MusicDraft) -> Result<i32, StorageError> {
        self.db.execute(
            &format!(
                "INSERT INTO {MUSIC} ({TITLE}, {COVER}, {ARTIST}, {URL}) VALUES (?1, ?2, ?3, ?4)"
            ),
            params![draft.title, draft.cover, draft.artist, draft.url],
        )?;

        let id = i32::try_from(self.db.last_insert_rowid())
            .map_err(|e| StorageError::Internal(anyhow!("generated row id out of range: {e}")))?;

        Ok(id)
    }

    /// Overwrites all fields of the row matching `music.id`.
    ///
    /// Returns the number of rows affected: 0 means no such row, callers
    /// that require existence must treat that as not found.
    pub fn replace(&mut self, music: &Music) -> Result<usize, StorageError> {
        let affected = self.db.execute(
            &format!(
                "UPDATE {MUSIC} SET {TITLE} = ?1, {COVER} = ?2, {ARTIST} = ?3, {URL} = ?4 \
                 WHERE {ID} = ?5"
            ),
            params![music.title, music.cover, music.artist, music.url, music.id],
        )?;

        Ok(affected)
    }

    /// Deletes the row matching `id`. Returns rows affected (0 or 1).
    pub fn remove(&mut self, id: i32) -> Result<usize, StorageError> {
        let affected = self.db.execute(
            &format!("DELETE FROM {MUSIC} WHERE {ID} = ?1"),
            params![id],
        )?;

        Ok(affected)
    }
}
