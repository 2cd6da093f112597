//! Browser transport for plugin commands, using `fetch`.

use fbads_widget::rpc::{decode_response, endpoint_url, CommandRequest};
use fbads_widget::{CommandClient, LocalBoxFuture, RemoteCallFailure};
use futures::FutureExt;
use serde_json::Value;
use std::cell::Cell;
use std::future::ready;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Posts `{"id", "method", "params"}` to `<base_url>/<endpoint>`.
pub struct FetchCommandClient {
    base_url: String,
    next_id: Cell<u64>,
}

impl FetchCommandClient {
    /// `base_url` may be empty to call the page's own origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            next_id: Cell::new(1),
        }
    }

    fn build_request(&self, endpoint: &str, method: &str, params: &Value) -> Result<Request, RemoteCallFailure> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let body = CommandRequest::new(id, method, params).to_body()?;
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(&body));

        let url = endpoint_url(&self.base_url, endpoint);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_failure)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_failure)?;
        log::debug!("[FBADS] POST {} #{} {}", url, id, method);
        Ok(request)
    }
}

impl CommandClient for FetchCommandClient {
    fn call(
        &self,
        endpoint: &str,
        method: &str,
        params: Value,
    ) -> LocalBoxFuture<'static, Result<Value, RemoteCallFailure>> {
        // The fetch starts here, before the returned future is polled.
        let started = self
            .build_request(endpoint, method, &params)
            .and_then(|request| start_fetch(&request));
        match started {
            Ok(fetch) => read_response(fetch).boxed_local(),
            Err(e) => ready(Err(e)).boxed_local(),
        }
    }
}

fn start_fetch(request: &Request) -> Result<JsFuture, RemoteCallFailure> {
    let window = web_sys::window()
        .ok_or_else(|| RemoteCallFailure::Transport("no window available".to_string()))?;
    Ok(JsFuture::from(window.fetch_with_request(request)))
}

async fn read_response(fetch: JsFuture) -> Result<Value, RemoteCallFailure> {
    let response: Response = fetch
        .await
        .map_err(js_failure)?
        .dyn_into()
        .map_err(|_| RemoteCallFailure::Transport("fetch did not return a Response".to_string()))?;
    if !response.ok() {
        return Err(RemoteCallFailure::Transport(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }

    let text = JsFuture::from(response.text().map_err(js_failure)?)
        .await
        .map_err(js_failure)?;
    let body = text
        .as_string()
        .ok_or_else(|| RemoteCallFailure::Malformed("response body is not text".to_string()))?;
    decode_response(&body)
}

fn js_failure(e: JsValue) -> RemoteCallFailure {
    RemoteCallFailure::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}
