//! axum middleware around `SecurityTxt::decide`.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::intercept::engine::{Decision, CONTENT_TYPE};

pub async fn security_txt(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let decision = state
        .security_txt()
        .decide(req.method().as_str(), req.uri().path());

    match decision {
        Decision::Serve(body) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
        }
        Decision::Redirect { status, location } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::MOVED_PERMANENTLY);
            (status, [(header::LOCATION, location)]).into_response()
        }
        Decision::Pass => next.run(req).await,
    }
}
