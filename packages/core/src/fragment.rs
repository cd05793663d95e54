/// The markup a [`ListView`](crate::ListView) appends on every render: a list holding one literal item.
///
/// The spaces between the tags are kept as written. Browsers collapse them to whitespace text nodes, so the
/// rendered list is the same as `<ul><li>hello world</li></ul>`.
pub const FRAGMENT: &str = "<ul> <li>hello world</li> </ul>";
