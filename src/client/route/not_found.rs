use dioxus::prelude::*;

use crate::client::component::ErrorPage;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(ErrorPage {
        status: 404,
        message: format!("Page /{} not found", path)
    })
}
