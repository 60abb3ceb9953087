use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no browser window or document")]
    NoWindow,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("browser call failed: {0}")]
    Js(String),
}

// `JsValue` is not an `Error`, so keep whatever text it carries
impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self { ClientError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value))) }
}
