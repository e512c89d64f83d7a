use crate::model::{ChatRequest, ChatResponse, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn network(e: JsValue) -> TransportError {
    TransportError::Network(format!("{:?}", e))
}

/// POST the request as JSON and decode `{"response": ...}`. No retries and
/// no timeout; the caller decides what a failure looks like to the user.
pub async fn send(endpoint: &str, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
    let body = request.to_json()?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let req = web::Request::new_with_str_and_init(endpoint, &init).map_err(network)?;
    req.headers()
        .set("Content-Type", "application/json")
        .map_err(network)?;

    let window = web::window().ok_or_else(|| TransportError::Network("no window".into()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    let status = resp.status();
    if !resp.ok() {
        return Err(TransportError::Status(status));
    }
    let text = JsFuture::from(resp.text().map_err(network)?)
        .await
        .map_err(network)?
        .as_string()
        .ok_or_else(|| TransportError::Decode("body is not text".into()))?;
    ChatResponse::from_reply(status, &text)
}
