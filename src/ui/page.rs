/// Binds the host page's markup to the controller

use crate::api::HttpApi;
use crate::clipboard::BrowserClipboard;
use crate::config::{ElementIds, PageConfig};
use crate::controller::PageController;
use crate::shortcuts::{Shortcut, shortcut_for};
use crate::timers::BrowserScheduler;
use crate::ui::animations;
use crate::ui::components::{RecentFeed, RecentList, RecentListProps, RecentUpdate};
use crate::url_data::ShortenResult;
use crate::view::{CopyLabel, PageView, RecentListing, ToastKind};
use gloo_events::{EventListener, EventListenerOptions};
use log::info;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
};
use yew::{AppHandle, Callback};

const BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Shortening..."#;
const COPIED_LABEL: &str = r#"<i class="fas fa-check"></i> Copied!"#;
const COPIED_BACKGROUND: &str = "#28a745";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StartupError {
    #[error("no document to bind to")]
    NoDocument,

    #[error("required element #{0} is missing from the page")]
    MissingElement(String),

    #[error("element {0} is not the expected kind of element")]
    WrongElement(String),

    #[error("invalid page config: {0}")]
    InvalidConfig(String),
}

pub type BrowserController = PageController<DomPage, HttpApi, BrowserClipboard, BrowserScheduler>;

/// Element handles looked up once at startup
pub struct DomPage {
    form: HtmlFormElement,
    input: HtmlInputElement,
    submit_button: HtmlButtonElement,
    submit_label: String,
    result_section: HtmlElement,
    short_url_output: HtmlInputElement,
    original_url_display: HtmlElement,
    click_count: HtmlElement,
    recent_feed: RecentFeed,
    _recent_app: AppHandle<RecentList>,
    copy_button: HtmlElement,
    copy_label: String,
    copy_background: String,
    toast: HtmlElement,
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, StartupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| StartupError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| StartupError::WrongElement(format!("#{}", id)))
}

impl DomPage {
    /// Look up every element the controller needs; any miss is fatal
    pub fn bind(document: &Document, ids: &ElementIds) -> Result<DomPage, StartupError> {
        let form: HtmlFormElement = by_id(document, &ids.form)?;
        let submit_button = form
            .query_selector(&ids.submit_button_selector)
            .ok()
            .flatten()
            .ok_or_else(|| StartupError::MissingElement(ids.submit_button_selector.clone()))?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| StartupError::WrongElement(ids.submit_button_selector.clone()))?;
        let input = by_id(document, &ids.input)?;
        let result_section = by_id(document, &ids.result_section)?;
        let short_url_output = by_id(document, &ids.short_url_output)?;
        let original_url_display = by_id(document, &ids.original_url_display)?;
        let click_count = by_id(document, &ids.click_count)?;
        let recent_urls: Element = by_id(document, &ids.recent_urls)?;
        let copy_button: HtmlElement = by_id(document, &ids.copy_button)?;
        let toast = by_id(document, &ids.toast)?;

        // Cards are rendered by Yew from here on
        recent_urls.set_inner_html("");
        let recent_feed = RecentFeed::default();
        let recent_app = yew::Renderer::<RecentList>::with_root_and_props(
            recent_urls,
            RecentListProps {
                feed: recent_feed.clone(),
            },
        )
        .render();

        Ok(DomPage {
            form,
            input,
            submit_label: submit_button.inner_html(),
            submit_button,
            result_section,
            short_url_output,
            original_url_display,
            click_count,
            recent_feed,
            _recent_app: recent_app,
            copy_label: copy_button.inner_html(),
            copy_background: copy_button
                .style()
                .get_property_value("background")
                .unwrap_or_default(),
            copy_button,
            toast,
        })
    }
}

impl PageView for DomPage {
    fn input_value(&self) -> String {
        self.input.value()
    }

    fn set_input_value(&self, value: &str) {
        self.input.set_value(value);
    }

    fn focus_input(&self) {
        let _ = self.input.focus();
    }

    fn set_submit_busy(&self, busy: bool) {
        if busy {
            self.submit_button.set_inner_html(BUSY_LABEL);
        } else {
            self.submit_button.set_inner_html(&self.submit_label);
        }
        self.submit_button.set_disabled(busy);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        let opacity = if enabled { "1" } else { "0.7" };
        let _ = self.submit_button.style().set_property("opacity", opacity);
        self.submit_button.set_disabled(!enabled);
    }

    fn show_result(&self, result: &ShortenResult) {
        self.short_url_output.set_value(&result.short_url);
        self.original_url_display.set_text_content(Some(&result.original_url));
        self.click_count.set_text_content(Some(&result.clicks.to_string()));

        let _ = self.result_section.style().set_property("display", "block");
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.result_section
            .scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn short_url_output(&self) -> String {
        self.short_url_output.value()
    }

    fn select_short_url_output(&self) {
        self.short_url_output.select();
    }

    fn render_recent(&self, listing: RecentListing, on_copy: Callback<String>) {
        self.recent_feed.push(RecentUpdate { listing, on_copy });
    }

    fn show_toast(&self, message: &str, kind: ToastKind) {
        self.toast.set_text_content(Some(message));
        self.toast.set_class_name(&format!("toast {}", kind.class_name()));
        let _ = self.toast.class_list().add_1("show");
    }

    fn hide_toast(&self) {
        let _ = self.toast.class_list().remove_1("show");
    }

    fn set_copy_label(&self, label: CopyLabel) {
        let style = self.copy_button.style();
        match label {
            CopyLabel::Copied => {
                self.copy_button.set_inner_html(COPIED_LABEL);
                let _ = style.set_property("background", COPIED_BACKGROUND);
            }
            CopyLabel::Copy => {
                self.copy_button.set_inner_html(&self.copy_label);
                if self.copy_background.is_empty() {
                    let _ = style.remove_property("background");
                } else {
                    let _ = style.set_property("background", &self.copy_background);
                }
            }
        }
    }
}

/// Keeps the controller and its listeners alive for the page's lifetime
pub struct MountedPage {
    pub controller: Rc<BrowserController>,
    _listeners: Vec<EventListener>,
}

/// Bind the page, wire its events and kick off the first recent-list load
pub fn mount(config: &PageConfig) -> Result<MountedPage, StartupError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(StartupError::NoDocument)?;

    animations::install(&document);

    let page = DomPage::bind(&document, &config.elements)?;
    let form = page.form.clone();
    let input = page.input.clone();
    let copy_button = page.copy_button.clone();

    let controller = PageController::new(
        page,
        HttpApi::new(&config.shorten_endpoint, &config.recent_endpoint),
        BrowserClipboard,
        BrowserScheduler,
        config,
    );

    let active = EventListenerOptions::enable_prevent_default();
    let listeners = vec![
        EventListener::new_with_options(&form, "submit", active, {
            let controller = controller.clone();
            move |event| {
                event.prevent_default();
                let controller = controller.clone();
                spawn_local(async move { controller.submit().await });
            }
        }),
        EventListener::new(&input, "input", {
            let controller = controller.clone();
            move |_| controller.validate_input()
        }),
        EventListener::new(&copy_button, "click", {
            let controller = controller.clone();
            move |_| {
                let controller = controller.clone();
                spawn_local(async move { controller.copy_result().await });
            }
        }),
        EventListener::new_with_options(&document, "keydown", active, {
            let controller = controller.clone();
            move |event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let Some(shortcut) = shortcut_for(&key.key(), key.ctrl_key(), key.meta_key()) else {
                    return;
                };
                if shortcut == Shortcut::Submit {
                    event.prevent_default();
                }
                let controller = controller.clone();
                spawn_local(async move { controller.handle_shortcut(shortcut).await });
            }
        }),
    ];

    info!("URL shortener page bound to #{}", config.elements.form);

    {
        let controller = controller.clone();
        spawn_local(async move { controller.start().await });
    }

    Ok(MountedPage {
        controller,
        _listeners: listeners,
    })
}
