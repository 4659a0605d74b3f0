/// The page surface the controller drives
use crate::relative_date::RelativeDate;
use crate::url_data::{ShortenResult, UrlRecord};
use yew::Callback;

pub const EMPTY_RECENT_MESSAGE: &str = "No URLs shortened yet. Be the first!";
pub const RECENT_ERROR_MESSAGE: &str = "Error loading recent URLs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyLabel {
    Copy,
    Copied,
}

/// A recent record plus its precomputed age label
#[derive(Debug, Clone, PartialEq)]
pub struct CardEntry {
    pub record: UrlRecord,
    pub age: RelativeDate,
}

/// What the recent-URLs container should show
#[derive(Debug, Clone, PartialEq)]
pub enum RecentListing {
    Cards(Vec<CardEntry>),
    Empty,
    Failed,
}

impl RecentListing {
    /// Placeholder text when there are no cards to show
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            RecentListing::Cards(_) => None,
            RecentListing::Empty => Some(EMPTY_RECENT_MESSAGE),
            RecentListing::Failed => Some(RECENT_ERROR_MESSAGE),
        }
    }
}

/// Element handles bound at startup
///
/// Every method is infallible: the elements were verified to exist when the
/// view was built.
pub trait PageView {
    fn input_value(&self) -> String;
    fn set_input_value(&self, value: &str);
    fn focus_input(&self);

    /// Busy state while a shorten request is in flight
    fn set_submit_busy(&self, busy: bool);
    /// Validator state: enabled at full opacity, or dimmed and disabled
    fn set_submit_enabled(&self, enabled: bool);

    /// Fill the result panel, make it visible and scroll to it
    fn show_result(&self, result: &ShortenResult);
    fn short_url_output(&self) -> String;
    fn select_short_url_output(&self);

    /// Replace everything in the recent-URLs container
    fn render_recent(&self, listing: RecentListing, on_copy: Callback<String>);

    fn show_toast(&self, message: &str, kind: ToastKind);
    fn hide_toast(&self);

    fn set_copy_label(&self, label: CopyLabel);
}
