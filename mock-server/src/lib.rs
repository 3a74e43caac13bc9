//! Test double for the postal-logistics JSON-RPC API.
//!
//! Emulates the two upstream surfaces the client core talks to: the JSON
//! endpoint at `POST /v2.0/json/` (dispatching canned envelopes on
//! `calledMethod`, including the service's habit of answering logical
//! errors with HTTP 200) and the binary document endpoint reached by a
//! path-encoded GET. Field values deliberately mix string-typed numbers
//! the way the real service does.

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

/// The one API key the double accepts.
pub const VALID_API_KEY: &str = "0f5f3dcf83a4ca3d6fd4d052c52e24a1";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub api_key: String,
    pub model_name: String,
    pub called_method: String,
    #[serde(default)]
    pub method_properties: serde_json::Value,
}

pub fn app() -> Router {
    Router::new()
        .route("/v2.0/json/", post(rpc))
        .route("/{*path}", get(file))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn rpc(Json(envelope): Json<Envelope>) -> Response {
    if envelope.api_key != VALID_API_KEY {
        return Json(json!({
            "success": false,
            "data": [],
            "errors": ["API key is invalid"],
            "errorCodes": ["20000100001"],
        }))
        .into_response();
    }
    match envelope.called_method.as_str() {
        "getAreas" => Json(json!({
            "success": true,
            "data": [
                {"Ref": "71508128-9b87-11de-822f-000c2965ae0e", "Description": "Київська", "AreasCount": "5"},
                {"Ref": "7150812a-9b87-11de-822f-000c2965ae0e", "Description": "Львівська", "AreasCount": "3"},
            ],
            "info": {"totalCount": 2},
        }))
        .into_response(),
        // Echoes the property bag back as a single object under `data`,
        // exercising the non-list shape some methods return.
        "echoParams" => Json(json!({
            "success": true,
            "data": envelope.method_properties,
            "info": {},
        }))
        .into_response(),
        "plainText" => "plain text".into_response(),
        "slowReply" => {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            Json(json!({"success": true, "data": [], "info": {}})).into_response()
        }
        _ => Json(json!({
            "success": false,
            "data": [],
            "errors": [format!(
                "Method {}.{} not found",
                envelope.model_name, envelope.called_method
            )],
            "errorCodes": ["20000200068"],
        }))
        .into_response(),
    }
}

async fn file(Path(path): Path<String>) -> Response {
    if path.ends_with(&format!("apiKey/{VALID_API_KEY}")) {
        "%PDF-1.4 mock document".into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
