#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod container;
mod fragment;
mod string;
mod view;

pub use crate::container::RootContainer;
pub use crate::fragment::FRAGMENT;
pub use crate::string::StringContainer;
pub use crate::view::ListView;

/// Re-export common types for ease of development use.
pub mod prelude {
    pub use crate::{ListView, RootContainer, StringContainer, FRAGMENT};
}
