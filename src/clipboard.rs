/// Clipboard access with the legacy `execCommand("copy")` fallbacks
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("copy command was refused")]
    CommandFailed,
}

#[allow(async_fn_in_trait)]
pub trait ClipboardProvider {
    /// Async Clipboard API
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Copy through a temporary off-screen text field
    fn copy_via_scratch_field(&self, text: &str) -> Result<(), ClipboardError>;

    /// Copy whatever the document currently has selected
    fn copy_selection(&self) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl ClipboardProvider for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window =
            web_sys::window().ok_or_else(|| ClipboardError::Unavailable("no window".into()))?;
        let navigator = window.navigator();

        // navigator.clipboard is missing outside secure contexts
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|e| ClipboardError::Unavailable(format!("{:?}", e)))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable("navigator.clipboard is undefined".into()));
        }

        JsFuture::from(navigator.clipboard().write_text(text))
            .await
            .map_err(|e| ClipboardError::Unavailable(format!("{:?}", e)))?;
        Ok(())
    }

    fn copy_via_scratch_field(&self, text: &str) -> Result<(), ClipboardError> {
        let document = html_document()?;
        let body = document
            .body()
            .ok_or_else(|| ClipboardError::Unavailable("no body".into()))?;

        let scratch: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(|e| ClipboardError::Unavailable(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|_| ClipboardError::Unavailable("textarea is not a text area".into()))?;
        scratch.set_value(text);
        let style = scratch.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("left", "-9999px");

        body.append_child(&scratch)
            .map_err(|e| ClipboardError::Unavailable(format!("{:?}", e)))?;
        scratch.select();
        let copied = exec_copy(&document);
        let _ = body.remove_child(&scratch);

        copied
    }

    fn copy_selection(&self) -> Result<(), ClipboardError> {
        exec_copy(&html_document()?)
    }
}

fn html_document() -> Result<HtmlDocument, ClipboardError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .ok_or_else(|| ClipboardError::Unavailable("no document".into()))
}

fn exec_copy(document: &HtmlDocument) -> Result<(), ClipboardError> {
    match document.exec_command("copy") {
        Ok(true) => Ok(()),
        _ => Err(ClipboardError::CommandFailed),
    }
}
