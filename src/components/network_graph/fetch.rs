use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::types::GraphDocument;

/// The one fatal failure mode of the page: the topology document could not
/// be fetched or parsed. Nothing is rendered after this.
#[derive(Error, Debug)]
pub enum FetchError {
	#[error("network error: {0}")]
	Network(String),

	#[error("endpoint returned HTTP {0}")]
	Status(u16),

	#[error("malformed topology document: {0}")]
	Parse(#[from] serde_json::Error),
}

fn js_err(value: JsValue) -> FetchError {
	FetchError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Issue one GET for the topology document. Transport, status, and parse
/// failures are all terminal; the caller never retries.
pub async fn fetch_graph(url: &str) -> Result<GraphDocument, FetchError> {
	let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;

	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(js_err)?
		.dyn_into()
		.map_err(js_err)?;
	if !response.ok() {
		return Err(FetchError::Status(response.status()));
	}

	let body = JsFuture::from(response.text().map_err(js_err)?)
		.await
		.map_err(js_err)?
		.as_string()
		.ok_or_else(|| FetchError::Network("response body is not text".into()))?;

	Ok(serde_json::from_str(&body)?)
}
