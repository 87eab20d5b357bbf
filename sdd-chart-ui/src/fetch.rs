//! Text fetch over the browser's fetch API.
//!
//! Used for the bundled CSV files and the us-atlas topology. Errors come
//! back as `anyhow::Error` so chart components can render them with
//! `ErrorDisplay` instead of propagating.

use anyhow::{anyhow, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// GET `url` and return the response body as text.
pub async fn fetch_text(url: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| anyhow!("building request for {url} failed: {e:?}"))?;

    let window = web_sys::window().ok_or_else(|| anyhow!("no window object"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow!("fetch of {url} failed: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| anyhow!("fetch of {url} returned a non-Response value"))?;

    if !response.ok() {
        return Err(anyhow!("HTTP {} fetching {url}", response.status()));
    }

    let body = JsFuture::from(
        response
            .text()
            .map_err(|e| anyhow!("reading body of {url} failed: {e:?}"))?,
    )
    .await
    .map_err(|e| anyhow!("reading body of {url} failed: {e:?}"))?;

    body.as_string()
        .ok_or_else(|| anyhow!("body of {url} was not text"))
}
