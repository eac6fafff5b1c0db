use dioxus::prelude::*;

use crate::{
    client::{constant::SITE_NAME, model::cache::Cache, router::Route},
    model::prompt::PromptConfigDto,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::{api::get_prompt_config, prompter::dom};

#[component]
pub fn App() -> Element {
    #[cfg(feature = "web")]
    let mut config_cache =
        use_context_provider(|| Signal::new(Cache::<PromptConfigDto>::default()));
    #[cfg(not(feature = "web"))]
    use_context_provider(|| Signal::new(Cache::<PromptConfigDto>::default()));

    // Fetch the prompt configuration once and install the prompter with it
    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_prompt_config().await });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(config) => {
                        if let Err(e) = dom::install(config) {
                            tracing::error!("Failed to install link prompter: {}", e);
                        }
                        config_cache.set(Cache::Fetched(config.clone()));
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch prompt configuration: {}", err);
                        config_cache.set(Cache::Error(err.clone()));
                    }
                }
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        Router::<Route> {}
    }
}
