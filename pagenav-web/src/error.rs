use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("page navigation already started")]
    AlreadyStarted,
    #[error(transparent)]
    Config(#[from] pagenav::Error),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] pagenav::ConfigError),
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
