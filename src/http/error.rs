use rouille::Response;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) =>
                Response::text(msg).with_status_code(400),

            ApiError::Internal(msg) =>
                Response::text(msg).with_status_code(500),
        }
    }
}
