/// Configuration for the web host.
///
/// This struct picks the element the list view is bound to.
///
/// # Example
///
/// ```rust, ignore
/// listview_web::launch(Config::new().with_root_selector("#main"))
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) root_selector: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_selector: "body".to_string(),
        }
    }
}

impl Config {
    /// Create a new config with the default root, the document body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSS selector of the element the view will use as its root.
    ///
    /// The first element matching the selector wins. It is looked up once, at launch.
    pub fn with_root_selector(mut self, selector: impl Into<String>) -> Self {
        self.root_selector = selector.into();
        self
    }

    /// The selector the root will be resolved with.
    pub fn root_selector(&self) -> &str {
        &self.root_selector
    }
}
