//! listview web
//!
//! ## Overview
//! ------------
//! This crate hosts the list view in a browser through web-sys. The page supplies the root: an element picked by a
//! CSS selector (the document body unless configured otherwise). The selector is resolved exactly once, when the
//! app launches, and the view keeps that element for the rest of the page's life.
//!
//! Rendering is one synchronous call on the main thread. There is no event loop and nothing to schedule; after
//! [`launch`] returns the app simply idles.
//!
//! ```rust, ignore
//! fn main() {
//!     listview_web::init_logger(tracing::Level::INFO);
//!     listview_web::launch(listview_web::Config::new().with_root_selector("#app")).unwrap();
//! }
//! ```

#![warn(missing_docs)]

mod cfg;
mod error;
mod launch;
mod logger;
mod root;

pub use crate::cfg::Config;
pub use crate::error::WebError;
pub use crate::launch::{launch, launch_default, resolve_root};
pub use crate::logger::init_logger;
pub use crate::root::WebRoot;

pub use listview_core::{ListView, RootContainer, FRAGMENT};
