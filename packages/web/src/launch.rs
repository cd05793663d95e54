//! This module contains the `launch` function, which is the main entry point for the web host

use crate::error::js_message;
use crate::{Config, WebError, WebRoot};
use listview_core::ListView;

/// Look up the configured root element in the current document.
///
/// The selector is resolved once; the returned root holds onto the element it found.
pub fn resolve_root(cfg: &Config) -> Result<WebRoot, WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    let selector = cfg.root_selector();
    let element = document
        .query_selector(selector)
        .map_err(|err| WebError::InvalidSelector {
            selector: selector.to_string(),
            message: js_message(&err),
        })?
        .ok_or_else(|| WebError::RootNotFound {
            selector: selector.to_string(),
        })?;

    tracing::debug!("resolved root element for selector {selector:?}");
    Ok(WebRoot::new(element))
}

/// Launch the list view into the page.
///
/// Resolves the root from `cfg`, binds a view to it and renders it once. The view is handed back so the caller can
/// keep it around; nothing else runs afterwards.
pub fn launch(cfg: Config) -> Result<ListView<WebRoot>, WebError> {
    let root = resolve_root(&cfg)?;
    let view = ListView::mount(root)?;
    tracing::info!("list view mounted into {:?}", cfg.root_selector());
    Ok(view)
}

/// Launch the list view into the document body.
pub fn launch_default() -> Result<ListView<WebRoot>, WebError> {
    launch(Config::default())
}
