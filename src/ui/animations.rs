/// Entrance animations and injected style rules
use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const SPINNER_STYLES: &str = "
    .fa-spinner {
        animation: spin 1s linear infinite;
    }

    @keyframes spin {
        0% { transform: rotate(0deg); }
        100% { transform: rotate(360deg); }
    }
";

const ENTRANCE_STYLES: &str = "
    .logo, .tagline {
        opacity: 0;
        transform: translateY(20px);
        transition: all 0.6s ease;
    }

    .url-card {
        animation: fadeInUp 0.5s ease forwards;
    }

    @keyframes fadeInUp {
        from {
            opacity: 0;
            transform: translateY(20px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }
";

/// Header elements and the delay before each slides in
const STAGGER: [(&str, u32); 2] = [(".logo", 100), (".tagline", 300)];

pub fn install(document: &Document) {
    inject_style(document, SPINNER_STYLES);
    inject_style(document, ENTRANCE_STYLES);

    for (selector, delay_ms) in STAGGER {
        reveal_later(document, selector, delay_ms);
    }
}

fn inject_style(document: &Document, css: &str) {
    let Some(head) = document.head() else {
        warn!("No <head> to inject styles into");
        return;
    };
    match document.create_element("style") {
        Ok(style) => {
            style.set_text_content(Some(css));
            let _ = head.append_child(&style);
        }
        Err(e) => warn!("Failed to create style element: {:?}", e),
    }
}

// Cosmetic only: a missing header element is skipped
fn reveal_later(document: &Document, selector: &str, delay_ms: u32) {
    let element = document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    match element {
        Some(element) => {
            Timeout::new(delay_ms, move || {
                let style = element.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", "translateY(0)");
            })
            .forget();
        }
        None => warn!("No element matches {} for the entrance animation", selector),
    }
}
