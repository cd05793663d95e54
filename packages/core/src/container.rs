/// A display element that a view can write markup into.
///
/// This is the only capability a [`ListView`](crate::ListView) needs from its host. Implementations own the
/// rendering target (a DOM element, a string buffer, ...) and decide what an append means there. The one rule is
/// that appending never replaces: anything already in the container stays in front of the new markup.
pub trait RootContainer {
    /// The failure the host reports when an append can't be applied.
    ///
    /// Views hand this back untouched.
    type Error;

    /// Append `html` after the container's existing content.
    fn append_html(&mut self, html: &str) -> Result<(), Self::Error>;
}

impl<C: RootContainer + ?Sized> RootContainer for &mut C {
    type Error = C::Error;

    fn append_html(&mut self, html: &str) -> Result<(), Self::Error> {
        (**self).append_html(html)
    }
}

impl<C: RootContainer + ?Sized> RootContainer for Box<C> {
    type Error = C::Error;

    fn append_html(&mut self, html: &str) -> Result<(), Self::Error> {
        (**self).append_html(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringContainer;
    use std::convert::Infallible;

    fn append_twice<C: RootContainer>(mut root: C, html: &str) -> Result<(), C::Error> {
        root.append_html(html)?;
        root.append_html(html)
    }

    #[test]
    fn borrowed_container_appends_to_owner() {
        let mut root = StringContainer::new();
        append_twice(&mut root, "<b>").unwrap();
        assert_eq!(root.as_str(), "<b><b>");
    }

    #[test]
    fn boxed_dyn_container() {
        let root: Box<dyn RootContainer<Error = Infallible>> =
            Box::new(StringContainer::with_content("a"));
        append_twice(root, "b").unwrap();
    }
}
