use crate::error::{js_message, WebError};
use listview_core::RootContainer;
use web_sys::Element;

/// A DOM element acting as the view's root container.
///
/// Appending inserts the markup at the element's `beforeend` position, after all existing children, so nothing the
/// page already put there is disturbed.
#[derive(Debug, Clone)]
pub struct WebRoot {
    element: Element,
}

impl WebRoot {
    /// Wrap an element the page already owns.
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// The wrapped element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// The element's current inner HTML, as serialized by the browser.
    pub fn inner_html(&self) -> String {
        self.element.inner_html()
    }
}

impl From<Element> for WebRoot {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}

impl RootContainer for WebRoot {
    type Error = WebError;

    fn append_html(&mut self, html: &str) -> Result<(), Self::Error> {
        self.element
            .insert_adjacent_html("beforeend", html)
            .map_err(|err| WebError::Append {
                message: js_message(&err),
            })
    }
}
