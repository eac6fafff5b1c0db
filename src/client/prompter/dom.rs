//! Browser adapter binding the prompter to the live document.
//!
//! All state lives in thread locals: the browser runs the prompter on a single thread
//! and event callbacks reach it from there.

use std::cell::RefCell;

use dioxus_logger::tracing;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    Element, EventTarget, HtmlAnchorElement, HtmlElement, MutationObserver,
    MutationObserverInit, MutationRecord, Node, Window,
};

use crate::{
    client::prompter::{
        dispatcher::{ClickDecision, ClickTarget, PromptDispatcher, PromptHost},
        link::{LinkScanner, PageLink, ScanOutcome},
        modal::{
            ModalSurface, ModalTemplate, MODAL_CLASS, MODAL_CLOSE_SELECTOR, MODAL_ID,
            MODAL_OPENED_CLASS, MODAL_REDIRECT_SELECTOR,
        },
    },
    model::prompt::PromptConfigDto,
};

struct Prompter {
    page_host: String,
    scanner: LinkScanner<DomLink>,
    dispatcher: PromptDispatcher<DomModalSurface>,
}

type EventCallback = Closure<dyn FnMut(web_sys::Event)>;
type MutationCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

thread_local! {
    static PROMPTER: RefCell<Option<Prompter>> = const { RefCell::new(None) };
    static LINK_CLICK_HANDLER: RefCell<Option<EventCallback>> = const { RefCell::new(None) };
    static MODAL_HANDLERS: RefCell<Vec<EventCallback>> = const { RefCell::new(Vec::new()) };
    static LINK_OBSERVER: RefCell<Option<(MutationObserver, MutationCallback)>> =
        const { RefCell::new(None) };
}

/// Installs the prompter on the current document.
///
/// Performs the initial scan and starts watching the document for inserted anchors.
/// Installing twice keeps the first installation.
pub fn install(config: &PromptConfigDto) -> Result<(), String> {
    if PROMPTER.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }

    let window = window()?;
    let page_host = window
        .location()
        .hostname()
        .map_err(|_| "page hostname is unavailable".to_string())?;

    let dispatcher = PromptDispatcher::new(config, DomModalSurface::default())?;

    PROMPTER.with(|slot| {
        *slot.borrow_mut() = Some(Prompter {
            page_host,
            scanner: LinkScanner::new(),
            dispatcher,
        });
    });

    notify_possible_new_links()?;
    observe_inserted_links()?;

    tracing::info!(
        "Link prompter installed in {} mode",
        config.presentation_mode.as_str()
    );

    Ok(())
}

/// Rescans the document and binds the click handler on all external anchors if new
/// ones were found.
pub fn notify_possible_new_links() -> Result<(), String> {
    let document = window()?
        .document()
        .ok_or_else(|| "document is unavailable".to_string())?;

    let links = document.links();
    let candidates = (0..links.length())
        .filter_map(|index| links.item(index))
        .filter_map(|element| element.dyn_into::<HtmlAnchorElement>().ok())
        .map(DomLink);

    let rebind = PROMPTER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(prompter) = slot.as_mut() else {
            return None;
        };

        match prompter.scanner.scan(&prompter.page_host, candidates) {
            ScanOutcome::Changed => Some(
                prompter
                    .scanner
                    .external()
                    .iter()
                    .map(|link| link.0.clone())
                    .collect::<Vec<_>>(),
            ),
            ScanOutcome::Unchanged => None,
        }
    });

    if let Some(anchors) = rebind {
        tracing::debug!("Binding link prompt on {} external links", anchors.len());
        bind_click_handler(&anchors);
    }

    Ok(())
}

fn bind_click_handler(anchors: &[HtmlAnchorElement]) {
    LINK_CLICK_HANDLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let callback = slot.get_or_insert_with(|| {
            Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(on_link_click))
        });

        for anchor in anchors {
            anchor.set_onclick(Some(callback.as_ref().unchecked_ref()));
        }
    });
}

fn on_link_click(event: web_sys::Event) {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };

    let decision = PROMPTER.with(|slot| {
        slot.borrow_mut().as_mut().map(|prompter| {
            prompter
                .dispatcher
                .handle_click(&DomClickTarget(target), &mut WindowHost)
        })
    });

    if decision == Some(ClickDecision::Cancel) {
        event.prevent_default();
    }
}

fn observe_inserted_links() -> Result<(), String> {
    let body = window()?
        .document()
        .and_then(|document| document.body())
        .ok_or_else(|| "document body is unavailable".to_string())?;

    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::wrap(Box::new(
        |records: js_sys::Array, _observer: MutationObserver| {
            let inserted_anchor = records
                .iter()
                .filter_map(|record| record.dyn_into::<MutationRecord>().ok())
                .any(|record| {
                    let nodes = record.added_nodes();
                    (0..nodes.length())
                        .filter_map(|index| nodes.item(index))
                        .any(|node| contains_anchor(&node))
                });

            if inserted_anchor {
                if let Err(e) = notify_possible_new_links() {
                    tracing::error!("Failed to rescan links: {}", e);
                }
            }
        },
    ));

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|_| "failed to create mutation observer".to_string())?;

    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer
        .observe_with_options(&body, &options)
        .map_err(|_| "failed to observe document body".to_string())?;

    LINK_OBSERVER.with(|slot| *slot.borrow_mut() = Some((observer, callback)));

    Ok(())
}

fn contains_anchor(node: &Node) -> bool {
    let Some(element) = node.dyn_ref::<Element>() else {
        return false;
    };

    element.tag_name().eq_ignore_ascii_case("a")
        || element.query_selector("a[href]").ok().flatten().is_some()
}

fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "window is unavailable".to_string())
}

/// A live anchor, compared by element identity.
#[derive(Clone, PartialEq)]
struct DomLink(HtmlAnchorElement);

impl PageLink for DomLink {
    fn href(&self) -> String {
        self.0.href()
    }

    fn hostname(&self) -> String {
        self.0.hostname()
    }

    fn scheme(&self) -> String {
        self.0.protocol().trim_end_matches(':').to_string()
    }
}

struct DomClickTarget(Element);

impl ClickTarget for DomClickTarget {
    fn href_attribute(&self) -> Option<String> {
        self.0.get_attribute("href")
    }

    fn enclosing_anchor_href(&self) -> Option<String> {
        self.0
            .closest("a")
            .ok()
            .flatten()
            .and_then(|anchor| anchor.get_attribute("href"))
    }
}

struct WindowHost;

impl PromptHost for WindowHost {
    fn confirm(&mut self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn navigate(&mut self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };

        if window.location().set_href(url).is_err() {
            tracing::error!("Failed to navigate to {}", url);
        }
    }
}

/// Modal rendered as the last child of the document body.
#[derive(Default)]
struct DomModalSurface {
    root: Option<HtmlElement>,
}

impl ModalSurface for DomModalSurface {
    fn mount(&mut self, template: &ModalTemplate) -> Result<(), String> {
        let document = window()?
            .document()
            .ok_or_else(|| "document is unavailable".to_string())?;
        let body = document
            .body()
            .ok_or_else(|| "document body is unavailable".to_string())?;

        let root = document
            .create_element("div")
            .map_err(|_| "failed to create prompt modal".to_string())?
            .dyn_into::<HtmlElement>()
            .map_err(|_| "prompt modal is not HtmlElement".to_string())?;
        root.set_id(MODAL_ID);
        root.class_list()
            .add_1(MODAL_CLASS)
            .map_err(|_| "failed to style prompt modal".to_string())?;
        root.set_inner_html(&template.to_html());

        body.append_child(&root)
            .map_err(|_| "failed to append prompt modal".to_string())?;

        wire_modal_triggers(&root)?;
        self.root = Some(root);

        Ok(())
    }

    fn set_open(&mut self, open: bool) -> Result<(), String> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| "prompt modal is not mounted".to_string())?;

        root.class_list()
            .toggle_with_force(MODAL_OPENED_CLASS, open)
            .map_err(|_| "failed to toggle prompt modal".to_string())?;

        Ok(())
    }
}

fn wire_modal_triggers(root: &HtmlElement) -> Result<(), String> {
    let backdrop = EventTarget::from(root.clone());
    let on_backdrop = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
        move |event: web_sys::Event| {
            if event.target().is_some_and(|target| target == backdrop) {
                dismiss_modal();
            }
        },
    ));
    root.add_event_listener_with_callback("click", on_backdrop.as_ref().unchecked_ref())
        .map_err(|_| "failed to wire prompt modal".to_string())?;

    let on_close = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(|_event| {
        dismiss_modal();
    }));
    add_listener_to_all(root, MODAL_CLOSE_SELECTOR, &on_close)?;

    let on_redirect = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
        |event: web_sys::Event| {
            event.prevent_default();
            PROMPTER.with(|slot| {
                if let Some(prompter) = slot.borrow_mut().as_mut() {
                    prompter.dispatcher.confirm_modal(&mut WindowHost);
                }
            });
        },
    ));
    add_listener_to_all(root, MODAL_REDIRECT_SELECTOR, &on_redirect)?;

    MODAL_HANDLERS.with(|handlers| {
        handlers
            .borrow_mut()
            .extend([on_backdrop, on_close, on_redirect]);
    });

    Ok(())
}

fn add_listener_to_all(
    root: &HtmlElement,
    selector: &str,
    callback: &EventCallback,
) -> Result<(), String> {
    let elements = root
        .query_selector_all(selector)
        .map_err(|_| format!("invalid selector {}", selector))?;

    for element in (0..elements.length()).filter_map(|index| elements.item(index)) {
        element
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|_| "failed to wire prompt modal".to_string())?;
    }

    Ok(())
}

fn dismiss_modal() {
    PROMPTER.with(|slot| {
        if let Some(prompter) = slot.borrow_mut().as_mut() {
            prompter.dispatcher.dismiss_modal();
        }
    });
}
