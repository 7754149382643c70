use crate::{
    domain::music::{MusicDraft, MusicPatch},
    graphql::{Context, MusicTrack},
    storage::error::StorageError,
};

pub struct Mutation;

#[juniper::graphql_object]
#[graphql(context = Context)]
impl Mutation {
    /// Stores a new track built from whatever arguments were supplied.
    fn create_music(
        context: &Context,
        title: Option<String>,
        cover: Option<String>,
        artist: Option<String>,
        url: Option<String>,
    ) -> Result<MusicTrack, StorageError> {
        let draft = MusicDraft {
            title,
            cover,
            artist,
            url,
        };
        Ok(MusicTrack::from_domain(context.service.save(draft)?))
    }

    /// Merges the supplied arguments into the stored track.
    ///
    /// Arguments left null keep their stored value. Fails with NOT_FOUND
    /// before writing anything if the id does not exist.
    fn update_music(
        context: &Context,
        id: i32,
        title: Option<String>,
        cover: Option<String>,
        artist: Option<String>,
        url: Option<String>,
    ) -> Result<MusicTrack, StorageError> {
        let patch = MusicPatch {
            title,
            cover,
            artist,
            url,
        };
        Ok(MusicTrack::from_domain(context.service.update(id, patch)?))
    }

    /// Deletes the track if it exists. Returns true either way: the return
    /// value only signals call completion, not that a row was removed.
    fn delete_music(context: &Context, id: i32) -> Result<bool, StorageError> {
        context.service.delete(id)?;
        Ok(true)
    }
}
