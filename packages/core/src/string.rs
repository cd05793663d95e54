use crate::RootContainer;
use std::convert::Infallible;
use std::fmt::{self, Display};

/// An in-memory root container that keeps its inner HTML in a `String`.
///
/// Useful for rendering outside a browser and for tests. Appending can't fail.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StringContainer {
    inner_html: String,
}

impl StringContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container that already holds some markup.
    pub fn with_content(html: impl Into<String>) -> Self {
        Self {
            inner_html: html.into(),
        }
    }

    /// The container's current inner HTML.
    pub fn as_str(&self) -> &str {
        &self.inner_html
    }

    /// Consume the container, returning its inner HTML.
    pub fn into_string(self) -> String {
        self.inner_html
    }
}

impl RootContainer for StringContainer {
    type Error = Infallible;

    fn append_html(&mut self, html: &str) -> Result<(), Self::Error> {
        self.inner_html.push_str(html);
        Ok(())
    }
}

impl Display for StringContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner_html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_after_existing_content() {
        let mut root = StringContainer::with_content("<p>x</p>");
        root.append_html("<hr>").unwrap();
        root.append_html("<br>").unwrap();
        assert_eq!(root.as_str(), "<p>x</p><hr><br>");
        assert_eq!(root.to_string(), "<p>x</p><hr><br>");
    }

    #[test]
    fn new_is_empty() {
        assert_eq!(StringContainer::new().into_string(), "");
    }
}
