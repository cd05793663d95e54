use wasm_bindgen::JsValue;

/// Failures from the browser while resolving or writing to the root element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebError {
    /// There is no global `window`, e.g. when running in a worker.
    #[error("no global `window` exists")]
    NoWindow,

    /// The window has no document attached.
    #[error("`window` has no document")]
    NoDocument,

    /// The browser rejected the root selector.
    #[error("invalid root selector `{selector}`: {message}")]
    InvalidSelector {
        /// The selector that was passed to `querySelector`.
        selector: String,
        /// What the browser reported.
        message: String,
    },

    /// Nothing in the document matches the root selector.
    #[error("no element matches root selector `{selector}`")]
    RootNotFound {
        /// The selector that matched nothing.
        selector: String,
    },

    /// The browser refused to insert markup into the root.
    #[error("failed to append to root: {message}")]
    Append {
        /// What the browser reported.
        message: String,
    },
}

/// Best-effort text for a thrown JS value. DOM exceptions aren't strings, so fall back to their debug form.
pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
