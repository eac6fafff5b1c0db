pub mod page;

pub use page::{ErrorPage, LoadingPage, Page};
