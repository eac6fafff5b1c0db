//! Interception of clicks on links that leave the site.
//!
//! The engine is split into host-independent parts and one browser adapter:
//!
//! - `link` - Classifies page anchors and keeps the set of external ones
//! - `dispatcher` - Decides what happens when an external link is clicked
//! - `modal` - Builds and drives the custom confirmation overlay
//! - `dom` - Binds the engine to the document through `web-sys` (`web` feature only)

pub mod dispatcher;
pub mod link;
pub mod modal;

#[cfg(feature = "web")]
pub mod dom;
