use crate::{
    graphql::{Context, MusicTrack},
    storage::error::StorageError,
};

pub struct Query;

#[juniper::graphql_object]
#[graphql(context = Context)]
impl Query {
    /// Every track in the catalog.
    fn all_musics(context: &Context) -> Result<Vec<MusicTrack>, StorageError> {
        let musics = context.service.find_all()?;
        Ok(musics.into_iter().map(MusicTrack::from_domain).collect())
    }

    /// A single track, or null if the id is unknown.
    fn music(context: &Context, id: i32) -> Result<Option<MusicTrack>, StorageError> {
        match context.service.find_by_id(id) {
            Ok(music) => Ok(Some(MusicTrack::from_domain(music))),
            Err(StorageError::MusicNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
