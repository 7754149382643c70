/// A catalogued music track.
///
/// The id is assigned by the storage layer on insert and never changes
/// afterwards. All metadata fields are nullable in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Music {
    pub id: i32,
    pub title: Option<String>,
    pub cover: Option<String>,
    pub artist: Option<String>,
    pub url: Option<String>,
}

/// A track that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicDraft {
    pub title: Option<String>,
    pub cover: Option<String>,
    pub artist: Option<String>,
    pub url: Option<String>,
}

impl MusicDraft {
    pub fn into_music(self, id: i32) -> Music {
        Music {
            id,
            title: self.title,
            cover: self.cover,
            artist: self.artist,
            url: self.url,
        }
    }
}

/// Field-by-field overwrite set for partial updates.
///
/// `Some` overwrites the stored value, `None` keeps it.
#[derive(Debug, Clone, Default)]
pub struct MusicPatch {
    pub title: Option<String>,
    pub cover: Option<String>,
    pub artist: Option<String>,
    pub url: Option<String>,
}

impl MusicPatch {
    pub fn apply_to(self, current: Music) -> Music {
        Music {
            id: current.id,
            title: self.title.or(current.title),
            cover: self.cover.or(current.cover),
            artist: self.artist.or(current.artist),
            url: self.url.or(current.url),
        }
    }
}
