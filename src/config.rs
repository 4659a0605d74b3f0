/// Page configuration passed in from the host page's JavaScript
use serde::{Deserialize, Serialize};

/// Ids of the host page elements the controller drives
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub form: String,
    pub input: String,
    pub result_section: String,
    pub short_url_output: String,
    pub original_url_display: String,
    pub click_count: String,
    pub recent_urls: String,
    pub copy_button: String,
    pub toast: String,
    /// CSS selector of the submit button, looked up inside the form
    pub submit_button_selector: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        ElementIds {
            form: "urlForm".to_string(),
            input: "urlInput".to_string(),
            result_section: "resultSection".to_string(),
            short_url_output: "shortUrlOutput".to_string(),
            original_url_display: "originalUrlDisplay".to_string(),
            click_count: "clickCount".to_string(),
            recent_urls: "recentUrls".to_string(),
            copy_button: "copyBtn".to_string(),
            toast: "toast".to_string(),
            submit_button_selector: ".shorten-btn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub shorten_endpoint: String,
    pub recent_endpoint: String,
    pub toast_duration_ms: u32,
    pub copied_reset_ms: u32,
    pub elements: ElementIds,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            shorten_endpoint: "/api/shorten".to_string(),
            recent_endpoint: "/api/recent".to_string(),
            toast_duration_ms: 3000,
            copied_reset_ms: 2000,
            elements: ElementIds::default(),
        }
    }
}
