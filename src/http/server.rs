use std::sync::Arc;

use juniper::http::GraphQLRequest;
use log::info;
use rouille::{Request, Response};

use crate::{
    config::HttpConfig,
    graphql::{self, Context},
    http::error::ApiError,
    service::MusicService,
};

pub struct HttpServer {
    service: Arc<MusicService>,
    schema: graphql::RootNode,
    pub config: HttpConfig,
}

impl HttpServer {
    pub fn new(service: MusicService, config: HttpConfig) -> Self {
        Self {
            service: Arc::new(service),
            schema: graphql::root_node(),
            config,
        }
    }

    pub fn run(self) {
        let addr = format!("{}:{}", self.config.bind_addr, self.config.port);
        rouille::start_server(addr, move |request| self.handle_request(request));
    }

    fn handle_request(&self, request: &Request) -> Response {
        Self::log_request(request);

        let response = rouille::router!(request,
            (POST) (/graphql) => {
                self.handle_graphql(request)
            },

            (GET) (/graphiql) => {
                Self::handle_graphiql_page()
            },
            _ => Response::empty_404()
        );

        info!("Response: {} {}", request.method(), response.status_code);
        response
    }

    fn log_request(request: &Request) {
        info!("{} {}", request.method(), request.url());
    }

    fn handle_graphql(&self, request: &Request) -> Response {
        let graphql_request: GraphQLRequest = match rouille::input::json_input(request) {
            Ok(r) => r,
            Err(e) => {
                return ApiError::BadRequest(format!("invalid graphql request: {e}"))
                    .into_response();
            }
        };

        let context = Context {
            service: Arc::clone(&self.service),
        };
        let graphql_response = graphql_request.execute_sync(&self.schema, &context);

        // Document-level failures (parse, validation, unknown operation)
        // get a 400; field errors ride in the 200 envelope.
        let status = if graphql_response.is_ok() { 200 } else { 400 };

        let body = match serde_json::to_string(&graphql_response) {
            Ok(body) => body,
            Err(e) => {
                return ApiError::Internal(format!("failed to serialize response: {e}"))
                    .into_response();
            }
        };

        Response::from_data("application/json", body).with_status_code(status)
    }

    /// Interactive exploration page. The embedded page loads its assets
    /// from jsDelivr; unpkg is unreachable in some deployments.
    fn handle_graphiql_page() -> Response {
        Response::html(include_str!("../../html/graphiql.html"))
    }
}

#[cfg(test)]
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: rouille::Response,
) -> anyhow::Result<T> {
    Ok(serde_json::from_reader(
        response.data.into_reader_and_size().0,
    )?)
}
