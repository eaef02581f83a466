pub mod likes;
pub mod matches;
pub mod pages;
pub mod payments;
pub mod profiles;

use std::ops::Deref;

use axum::{
    Json, Router,
    extract::FromRef,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use payments::Gateways;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub gateways: Gateways,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(pages::router())
        .nest("/api/likes", likes::router())
        .nest("/api/matches", matches::router())
        .nest("/api/profiles", profiles::router())
        .nest("/api/payments", payments::router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub trait GetField {
    fn get_str_field(&self, field: &str) -> AppResult<String>;
    fn get_obj_field(&self, field: &str) -> AppResult<&Value>;
}

impl GetField for serde_json::Value {
    fn get_str_field(&self, field: &str) -> AppResult<String> {
        Ok(
            self.get(field)
            .ok_or(format!("expected {field} in payload"))?
            .as_str()
            .ok_or(format!("expected {field} in payload to be string"))?
            .to_owned()
        )
    }

    fn get_obj_field(&self, field: &str) -> AppResult<&Value> {
        self.get(field)
        .ok_or(format!("expected {field} in payload").into())
    }
}


pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    // signature or ownership failures; distinct from BadRequest so the UI
    // can say "payment failed" instead of "bad request"
    #[error("{0}")]
    PaymentRejected(String),
    #[error("{0} keys not supplied")]
    Misconfigured(&'static str),
    #[error(transparent)]
    Gateway(#[from] reqwest::Error),
    #[error(transparent)]
    Store(#[from] sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Self::PaymentRejected(_) => (StatusCode::BAD_REQUEST, "payment_rejected"),
            Self::Misconfigured(_) | Self::Gateway(_) => {
                tracing::error!(error = %self, "payment gateway failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "gateway")
            }
            Self::Store(_) => {
                tracing::error!(error = %self, "store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "store")
            }
            Self::Internal(_) => {
                tracing::error!(error = %self, "unhandled failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };

        let message = if status.is_server_error() {
            "internal server error".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        Self::BadRequest(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        Self::BadRequest(err.to_owned())
    }
}

pub struct Markdown<T>(pub T);

impl<T> IntoResponse for Markdown<T>
where
    T: Deref<Target = str>
{
    fn into_response(self) -> Response {
        let mut html_output = String::new();
        pulldown_cmark::html::push_html(&mut html_output, pulldown_cmark::Parser::new(&*self.0));
        Html(html_output).into_response()
    }
}
