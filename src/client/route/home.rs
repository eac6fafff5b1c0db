use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::prompt::PromptConfigDto,
};

/// Preview of the active prompt with a link to try it on.
#[component]
pub fn Home() -> Element {
    let config = use_context::<Signal<Cache<PromptConfigDto>>>();

    if let Some(error) = config.read().error() {
        return rsx!(ErrorPage {
            status: error.status,
            message: error.message.clone()
        });
    }

    let Some(config) = config.read().data().cloned() else {
        return rsx!(LoadingPage {});
    };

    rsx!(
        Page {
            class: "flex flex-col gap-4 max-w-2xl mx-auto",
            h1 { class: "text-2xl font-bold", {SITE_NAME} }
            div {
                class: "flex gap-2",
                span { class: "font-semibold", "Presentation mode:" }
                span { {config.presentation_mode.as_str()} }
            }
            div {
                class: "flex flex-col gap-1",
                span { class: "font-semibold", {config.message.title} }
                p { {config.message.plain_content} }
            }
            a {
                class: "link link-primary",
                href: "https://www.rust-lang.org/",
                "Try an external link"
            }
        }
    )
}
