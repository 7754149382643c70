use std::sync::Arc;

use juniper::{
    EmptySubscription, FieldError, GraphQLObject, IntoFieldError, ScalarValue, graphql_value,
};

use crate::{domain::music::Music, service::MusicService, storage::error::StorageError};

pub mod mutation;
pub mod query;

pub use mutation::Mutation;
pub use query::Query;

/// The context that is accessible to every resolver.
pub struct Context {
    pub service: Arc<MusicService>,
}

impl juniper::Context for Context {}

/// Type of the API root node.
pub type RootNode = juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

/// Creates and returns the API root node.
pub fn root_node() -> RootNode {
    RootNode::new(Query, Mutation, EmptySubscription::<Context>::new())
}

/// Serialized track shape exposed through the schema.
#[derive(GraphQLObject)]
#[graphql(description = "A catalogued music track")]
pub struct MusicTrack {
    pub id: i32,
    pub title: Option<String>,
    pub cover: Option<String>,
    pub artist: Option<String>,
    pub url: Option<String>,
}

impl MusicTrack {
    pub fn from_domain(music: Music) -> Self {
        Self {
            id: music.id,
            title: music.title,
            cover: music.cover,
            artist: music.artist,
            url: music.url,
        }
    }
}

impl<S: ScalarValue> IntoFieldError<S> for StorageError {
    fn into_field_error(self) -> FieldError<S> {
        match &self {
            StorageError::MusicNotFound(_) => FieldError::new(
                self.to_string(),
                graphql_value!({ "code": "NOT_FOUND" }),
            ),
            StorageError::Database(_) | StorageError::Internal(_) => FieldError::new(
                self.to_string(),
                graphql_value!({ "code": "STORAGE_ERROR" }),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use juniper::http::GraphQLRequest;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        graphql::{Context, root_node},
        service::MusicService,
        storage::{operations::Storage, schema},
    };

    fn setup_context() -> Context {
        let conn = Connection::open_in_memory().unwrap();
        schema::init(&conn).unwrap();
        let service = MusicService::new(Storage::from_existing_conn(conn));
        Context {
            service: Arc::new(service),
        }
    }

    fn execute(context: &Context, body: serde_json::Value) -> serde_json::Value {
        let request: GraphQLRequest = serde_json::from_value(body).unwrap();
        let response = request.execute_sync(&root_node(), context);
        serde_json::to_value(&response).unwrap()
    }

    fn execute_query(context: &Context, query: &str) -> serde_json::Value {
        execute(context, json!({ "query": query }))
    }

    #[test]
    fn all_musics_on_empty_catalog_is_empty_list() {
        let context = setup_context();

        let resp = execute_query(&context, "{ allMusics { id title } }");

        assert_eq!(resp["data"]["allMusics"], json!([]));
        assert!(resp.get("errors").is_none());
    }

    #[test]
    fn create_music_returns_track_with_generated_id() {
        let context = setup_context();

        let resp = execute_query(
            &context,
            r#"mutation {
                createMusic(title: "A", cover: "c1", artist: "Art1", url: "u1") {
                    id title cover artist url
                }
            }"#,
        );

        assert_eq!(
            resp["data"]["createMusic"],
            json!({ "id": 1, "title": "A", "cover": "c1", "artist": "Art1", "url": "u1" })
        );
    }

    #[test]
    fn create_music_with_no_arguments_stores_null_fields() {
        let context = setup_context();

        let resp = execute_query(&context, "mutation { createMusic { id title artist } }");

        assert_eq!(
            resp["data"]["createMusic"],
            json!({ "id": 1, "title": null, "artist": null })
        );
    }

    #[test]
    fn music_query_supports_variables() {
        let context = setup_context();
        execute_query(&context, r#"mutation { createMusic(title: "A") { id } }"#);

        let resp = execute(
            &context,
            json!({
                "query": "query ($id: Int!) { music(id: $id) { id title } }",
                "variables": { "id": 1 },
            }),
        );

        assert_eq!(resp["data"]["music"], json!({ "id": 1, "title": "A" }));
    }

    #[test]
    fn music_query_with_unknown_id_is_null() {
        let context = setup_context();

        let resp = execute_query(&context, "{ music(id: 42) { id } }");

        assert_eq!(resp["data"]["music"], json!(null));
        assert!(resp.get("errors").is_none());
    }

    #[test]
    fn update_music_merges_supplied_fields_only() {
        let context = setup_context();
        execute_query(
            &context,
            r#"mutation {
                createMusic(title: "A", cover: "c1", artist: "Art1", url: "u1") { id }
            }"#,
        );

        let resp = execute_query(
            &context,
            r#"mutation {
                updateMusic(id: 1, artist: "Art2") { id title cover artist url }
            }"#,
        );

        assert_eq!(
            resp["data"]["updateMusic"],
            json!({ "id": 1, "title": "A", "cover": "c1", "artist": "Art2", "url": "u1" })
        );
    }

    #[test]
    fn update_music_with_unknown_id_is_not_found_error() {
        let context = setup_context();

        let resp = execute_query(
            &context,
            r#"mutation { updateMusic(id: 42, title: "X") { id } }"#,
        );

        let errors = resp["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(
            errors[0]["message"]
                .as_str()
                .unwrap()
                .contains("music 42 not found")
        );
        assert_eq!(errors[0]["extensions"]["code"], json!("NOT_FOUND"));
    }

    #[test]
    fn delete_music_returns_true_even_for_unknown_id() {
        let context = setup_context();

        let resp = execute_query(&context, "mutation { deleteMusic(id: 42) }");

        assert_eq!(resp["data"]["deleteMusic"], json!(true));
        assert!(resp.get("errors").is_none());
    }

    #[test]
    fn deleted_track_no_longer_resolves() {
        let context = setup_context();
        execute_query(&context, r#"mutation { createMusic(title: "A") { id } }"#);

        let resp = execute_query(&context, "mutation { deleteMusic(id: 1) }");
        assert_eq!(resp["data"]["deleteMusic"], json!(true));

        let resp = execute_query(&context, "{ music(id: 1) { id } }");
        assert_eq!(resp["data"]["music"], json!(null));
    }
}
