//! Browser tests, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use url_shortener_web::relative_date::RelativeDate;
use url_shortener_web::ui::page::{DomPage, StartupError};
use url_shortener_web::url_data::{ShortenResult, UrlRecord};
use url_shortener_web::view::{CardEntry, CopyLabel, PageView, RecentListing, ToastKind};
use url_shortener_web::{ElementIds, format_created_at, is_valid_url};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlInputElement};
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

const HOST_MARKUP: &str = r#"
    <form id="urlForm">
        <input id="urlInput" type="url">
        <button class="shorten-btn" type="submit">Shorten</button>
    </form>
    <div id="resultSection" style="display: none">
        <input id="shortUrlOutput" readonly>
        <button id="copyBtn">Copy</button>
        <span id="originalUrlDisplay"></span>
        <span id="clickCount"></span>
    </div>
    <div id="recentUrls"><div class="loading">Loading...</div></div>
    <div id="toast" class="toast"></div>
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn install_markup(markup: &str) -> Document {
    let document = document();
    document.body().unwrap().set_inner_html(markup);
    document
}

fn bind_host() -> (Document, DomPage) {
    let document = install_markup(HOST_MARKUP);
    let page = DomPage::bind(&document, &ElementIds::default()).unwrap();
    (document, page)
}

fn element<T: JsCast>(document: &Document, selector: &str) -> T {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<T>()
        .unwrap()
}

// Yew renders on its own scheduler; give it a couple of turns
async fn settle() {
    TimeoutFuture::new(20).await;
    TimeoutFuture::new(20).await;
}

#[wasm_bindgen_test]
fn binds_complete_markup() {
    let document = install_markup(HOST_MARKUP);

    assert!(DomPage::bind(&document, &ElementIds::default()).is_ok());

    // Host placeholder is cleared for the rendered cards
    let recent = document.get_element_by_id("recentUrls").unwrap();
    assert_eq!(recent.inner_html(), "");
}

#[wasm_bindgen_test]
fn missing_toast_is_fatal() {
    let markup = HOST_MARKUP.replace(r#"<div id="toast" class="toast"></div>"#, "");
    let document = install_markup(&markup);

    match DomPage::bind(&document, &ElementIds::default()) {
        Err(err) => assert_eq!(err, StartupError::MissingElement("toast".to_string())),
        Ok(_) => panic!("bind should fail without a toast element"),
    }
}

#[wasm_bindgen_test]
fn missing_submit_button_is_fatal() {
    let document = install_markup(&HOST_MARKUP.replace("shorten-btn", "other-btn"));

    match DomPage::bind(&document, &ElementIds::default()) {
        Err(err) => assert_eq!(err, StartupError::MissingElement(".shorten-btn".to_string())),
        Ok(_) => panic!("bind should fail without a submit button"),
    }
}

#[wasm_bindgen_test]
fn validator_export() {
    assert!(is_valid_url("https://example.com"));
    assert!(!is_valid_url("not a url"));
}

#[wasm_bindgen_test]
fn old_dates_use_locale_format() {
    let label = format_created_at("2001-02-03T04:05:06");

    assert_ne!(label, "Today");
    assert!(!label.ends_with("days ago"));
    assert!(label.contains("2001"));
}

#[wasm_bindgen_test]
fn show_result_fills_and_reveals_panel() {
    let (document, page) = bind_host();

    page.show_result(&ShortenResult {
        short_url: "http://sho.rt/abc123".to_string(),
        original_url: "https://example.com/a/long/path".to_string(),
        clicks: 7,
        short_code: Some("abc123".to_string()),
    });

    let section: HtmlElement = element(&document, "#resultSection");
    assert_eq!(section.style().get_property_value("display").unwrap(), "block");
    let output: HtmlInputElement = element(&document, "#shortUrlOutput");
    assert_eq!(output.value(), "http://sho.rt/abc123");
    let original: HtmlElement = element(&document, "#originalUrlDisplay");
    assert_eq!(original.text_content().unwrap(), "https://example.com/a/long/path");
    let clicks: HtmlElement = element(&document, "#clickCount");
    assert_eq!(clicks.text_content().unwrap(), "7");
}

#[wasm_bindgen_test]
fn submit_busy_swaps_label_and_restores_it() {
    let (document, page) = bind_host();
    let button: HtmlButtonElement = element(&document, ".shorten-btn");

    page.set_submit_busy(true);
    assert!(button.disabled());
    assert!(button.text_content().unwrap().contains("Shortening..."));

    page.set_submit_busy(false);
    assert!(!button.disabled());
    assert_eq!(button.inner_html(), "Shorten");
}

#[wasm_bindgen_test]
fn toast_shows_kind_then_hides() {
    let (document, page) = bind_host();
    let toast: HtmlElement = element(&document, "#toast");

    page.show_toast("Please enter a URL", ToastKind::Error);
    assert_eq!(toast.class_name(), "toast error show");
    assert_eq!(toast.text_content().unwrap(), "Please enter a URL");

    page.hide_toast();
    assert_eq!(toast.class_name(), "toast error");
}

#[wasm_bindgen_test]
fn copy_label_restores_startup_look() {
    let markup = HOST_MARKUP.replace(
        r#"<button id="copyBtn">Copy</button>"#,
        concat!(
            r#"<button id="copyBtn" style="background: rgb(0, 123, 255)">"#,
            r#"<i class="fas fa-copy"></i> Copy</button>"#,
        ),
    );
    let document = install_markup(&markup);
    let button: HtmlElement = element(&document, "#copyBtn");
    let label = button.inner_html();
    let background = button.style().get_property_value("background").unwrap();
    let page = DomPage::bind(&document, &ElementIds::default()).unwrap();

    page.set_copy_label(CopyLabel::Copied);
    assert!(button.text_content().unwrap().contains("Copied!"));
    assert_ne!(button.style().get_property_value("background").unwrap(), background);

    page.set_copy_label(CopyLabel::Copy);
    assert_eq!(button.inner_html(), label);
    assert_eq!(button.style().get_property_value("background").unwrap(), background);
}

#[wasm_bindgen_test]
async fn empty_listing_shows_placeholder() {
    let (document, page) = bind_host();

    page.render_recent(RecentListing::Empty, Callback::noop());
    settle().await;

    let placeholder: HtmlElement = element(&document, "#recentUrls .loading");
    assert_eq!(
        placeholder.text_content().unwrap(),
        "No URLs shortened yet. Be the first!"
    );
}

#[wasm_bindgen_test]
async fn card_shows_record_and_copies_on_click() {
    let (document, page) = bind_host();
    let copied = Rc::new(RefCell::new(Vec::<String>::new()));
    let on_copy = {
        let copied = copied.clone();
        Callback::from(move |short_url: String| copied.borrow_mut().push(short_url))
    };

    let entry = CardEntry {
        record: UrlRecord {
            short_url: "http://sho.rt/xyz789".to_string(),
            short_code: "xyz789".to_string(),
            original_url: "https://rust-lang.org".to_string(),
            created_at: "2024-10-28T10:30:00".to_string(),
            clicks: 12,
        },
        age: RelativeDate::DaysAgo(3),
    };
    page.render_recent(RecentListing::Cards(vec![entry]), on_copy);
    settle().await;

    let card: HtmlElement = element(&document, "#recentUrls .url-card");
    let text = |selector: &str| {
        card.query_selector(selector).unwrap().unwrap().text_content().unwrap()
    };
    assert_eq!(text(".short-url"), "http://sho.rt/xyz789");
    assert_eq!(text(".original-url"), "https://rust-lang.org");
    let stats = text(".stats");
    assert!(stats.contains("3 days ago"));
    assert!(stats.contains("12 clicks"));

    card.click();
    assert_eq!(*copied.borrow(), vec!["http://sho.rt/xyz789".to_string()]);
}

#[wasm_bindgen_test]
async fn later_listing_replaces_earlier_one() {
    let (document, page) = bind_host();

    page.render_recent(RecentListing::Failed, Callback::noop());
    settle().await;
    page.render_recent(RecentListing::Empty, Callback::noop());
    settle().await;

    let recent: HtmlElement = element(&document, "#recentUrls");
    assert_eq!(recent.child_element_count(), 1);
    assert_eq!(
        recent.text_content().unwrap(),
        "No URLs shortened yet. Be the first!"
    );
}
