use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;

use crate::{
    domain::music::{Music, MusicDraft, MusicPatch},
    storage::{error::StorageError, operations::Storage},
};

/// Stateless CRUD facade over the storage accessor.
///
/// The rouille server handles requests on multiple threads, so the single
/// database connection is guarded by a mutex. Each call re-reads or
/// re-writes storage; nothing is cached between calls.
pub struct MusicService {
    storage: Mutex<Storage>,
}

impl MusicService {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage: Mutex::new(storage),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Storage>, StorageError> {
        self.storage
            .lock()
            .map_err(|e| StorageError::Internal(anyhow!("storage lock poisoned: {e}")))
    }

    pub fn find_all(&self) -> Result<Vec<Music>, StorageError> {
        self.lock()?.list_all()
    }

    pub fn find_by_id(&self, id: i32) -> Result<Music, StorageError> {
        self.lock()?
            .get_by_id(id)?
            .ok_or(StorageError::MusicNotFound(id))
    }

    /// Inserts the draft and returns it with the generated id populated.
    pub fn save(&self, draft: MusicDraft) -> Result<Music, StorageError> {
        let id = self.lock()?.insert(&draft)?;
        log::debug!("saved music {id}");
        Ok(draft.into_music(id))
    }

    /// Merges the patch into the stored row and persists the result.
    ///
    /// Only fields supplied in the patch overwrite stored values. Fails with
    /// `MusicNotFound` before writing anything if the id is absent. The
    /// fetch and the write run under one lock guard, so they cannot
    /// interleave with other requests on this connection.
    pub fn update(&self, id: i32, patch: MusicPatch) -> Result<Music, StorageError> {
        let mut storage = self.lock()?;

        let current = storage
            .get_by_id(id)?
            .ok_or(StorageError::MusicNotFound(id))?;
        let merged = patch.apply_to(current);

        match storage.replace(&merged)? {
            0 => Err(StorageError::MusicNotFound(id)),
            _ => Ok(merged),
        }
    }

    /// Deletes the row if it exists. Succeeds silently when it does not;
    /// there is no existence check before delete.
    pub fn delete(&self, id: i32) -> Result<(), StorageError> {
        let affected = self.lock()?.remove(id)?;
        log::debug!("delete music {id}: {affected} rows affected");
        Ok(())
    }
}
