use crate::{RootContainer, FRAGMENT};

/// The list view: a handle to one root container that it draws a fixed list into.
///
/// The root is injected at construction and never swapped out afterwards. Creating a view has no side effects;
/// nothing is written until [`ListView::render`] runs (or [`ListView::mount`], which does both).
///
/// ```rust
/// use listview_core::{ListView, StringContainer, FRAGMENT};
///
/// let view = ListView::mount(StringContainer::new()).unwrap();
/// assert_eq!(view.root().as_str(), FRAGMENT);
/// ```
#[derive(Debug)]
pub struct ListView<R> {
    root: R,
}

impl<R: RootContainer> ListView<R> {
    /// Bind a view to `root` without rendering.
    pub fn new(root: R) -> Self {
        Self { root }
    }

    /// Bind a view to `root` and render it once.
    ///
    /// This is the self-rendering constructor: the view draws itself as soon as it exists.
    pub fn mount(root: R) -> Result<Self, R::Error> {
        let mut view = Self::new(root);
        view.render()?;
        Ok(view)
    }

    /// Append the list fragment to the root.
    ///
    /// Every call appends another copy; there is no guard against rendering twice. Errors from the container are
    /// returned as-is.
    pub fn render(&mut self) -> Result<(), R::Error> {
        tracing::trace!("rendering list fragment into root");
        self.root.append_html(FRAGMENT)
    }

    /// The root container this view is bound to.
    pub fn root(&self) -> &R {
        &self.root
    }

    /// Unbind the view, handing back its root container.
    pub fn into_root(self) -> R {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringContainer;
    use pretty_assertions::assert_eq;

    /// A root that rejects every append after the first `budget` ones.
    struct Flaky {
        budget: usize,
        appended: Vec<String>,
    }

    #[derive(Debug, PartialEq)]
    struct Exhausted;

    impl RootContainer for Flaky {
        type Error = Exhausted;

        fn append_html(&mut self, html: &str) -> Result<(), Exhausted> {
            if self.budget == 0 {
                return Err(Exhausted);
            }
            self.budget -= 1;
            self.appended.push(html.to_string());
            Ok(())
        }
    }

    #[test]
    fn new_leaves_root_untouched() {
        let view = ListView::new(StringContainer::with_content("<p>x</p>"));
        assert_eq!(view.root().as_str(), "<p>x</p>");
    }

    #[test]
    fn mount_renders_exactly_once() {
        let view = ListView::mount(StringContainer::new()).unwrap();
        assert_eq!(view.into_root().into_string(), FRAGMENT);
    }

    #[test]
    fn host_errors_pass_through() {
        let root = Flaky {
            budget: 1,
            appended: Vec::new(),
        };
        let mut view = ListView::mount(root).unwrap();
        assert_eq!(view.render(), Err(Exhausted));
        assert_eq!(view.root().appended, vec![FRAGMENT.to_string()]);

        let empty = Flaky {
            budget: 0,
            appended: Vec::new(),
        };
        assert!(matches!(ListView::mount(empty), Err(Exhausted)));
    }

    #[test]
    fn view_over_borrowed_root() {
        let mut root = StringContainer::new();
        ListView::mount(&mut root).unwrap();
        assert_eq!(root.as_str(), FRAGMENT);
    }
}
