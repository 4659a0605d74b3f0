/// URL Shortener - browser client for the shortening service
/// Built with Rust + WASM + Yew

mod api;
mod clipboard;
mod config;
mod controller;
pub mod relative_date;
mod shortcuts;
mod timers;
pub mod url_data;
mod validation;
pub mod view;
pub mod ui;

use std::cell::RefCell;
use ui::page::{MountedPage, StartupError};
use wasm_bindgen::prelude::*;

pub use config::{ElementIds, PageConfig};

thread_local! {
    static PAGE: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Bind the controller to the host page
///
/// `config` may be `undefined` for the defaults. Fails when a required
/// element is missing from the markup.
#[wasm_bindgen]
pub fn start_page(config: JsValue) -> Result<(), JsValue> {
    let mounted = parse_config(config).and_then(|config| ui::page::mount(&config));

    match mounted {
        Ok(page) => {
            PAGE.with(|slot| *slot.borrow_mut() = Some(page));
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to start page: {}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

fn parse_config(value: JsValue) -> Result<PageConfig, StartupError> {
    if value.is_undefined() || value.is_null() {
        return Ok(PageConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

// Re-export pure helpers for JavaScript access
#[wasm_bindgen]
pub fn is_valid_url(url: &str) -> bool {
    validation::accepts_input(url)
}

#[wasm_bindgen]
pub fn format_created_at(created_at: &str) -> String {
    let age = relative_date::describe_created_at(created_at, chrono::Utc::now());
    ui::components::age_label(&age)
}
