/// Page controller: form submission, recent list, copy and toast feedback
use crate::api::{ApiError, ShortenerApi};
use crate::clipboard::ClipboardProvider;
use crate::config::PageConfig;
use crate::relative_date::describe_created_at;
use crate::shortcuts::Shortcut;
use crate::timers::{Scheduler, TimerSlot};
use crate::validation::{accepts_input, normalize_input};
use crate::view::{CardEntry, CopyLabel, PageView, RecentListing, ToastKind};
use log::{debug, error, info, warn};
use std::rc::{Rc, Weak};
use yew::Callback;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a valid URL";
pub const SHORTENED_MESSAGE: &str = "URL shortened successfully!";
pub const COPIED_MESSAGE: &str = "URL copied to clipboard!";

pub struct PageController<V, A, C, S: Scheduler> {
    view: V,
    api: A,
    clipboard: C,
    scheduler: S,
    toast_timer: TimerSlot<S::Handle>,
    copy_label_timer: TimerSlot<S::Handle>,
    toast_duration_ms: u32,
    copied_reset_ms: u32,
    this: Weak<Self>,
}

/// Puts the submit control back when dropped, on every exit path
struct BusyGuard<'a, V: PageView> {
    view: &'a V,
}

impl<'a, V: PageView> BusyGuard<'a, V> {
    fn engage(view: &'a V) -> Self {
        view.set_submit_busy(true);
        BusyGuard { view }
    }
}

impl<V: PageView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_busy(false);
    }
}

impl<V, A, C, S> PageController<V, A, C, S>
where
    V: PageView + 'static,
    A: ShortenerApi + 'static,
    C: ClipboardProvider + 'static,
    S: Scheduler + 'static,
{
    pub fn new(view: V, api: A, clipboard: C, scheduler: S, config: &PageConfig) -> Rc<Self> {
        Rc::new_cyclic(|this| PageController {
            view,
            api,
            clipboard,
            scheduler,
            toast_timer: TimerSlot::new(),
            copy_label_timer: TimerSlot::new(),
            toast_duration_ms: config.toast_duration_ms,
            copied_reset_ms: config.copied_reset_ms,
            this: this.clone(),
        })
    }

    /// Page load: focus the input and fetch the recent list
    pub async fn start(&self) {
        self.view.focus_input();
        self.load_recent().await;
    }

    /// Form submission
    pub async fn submit(&self) {
        let Some(url) = normalize_input(&self.view.input_value()) else {
            self.show_toast(EMPTY_INPUT_MESSAGE, ToastKind::Error);
            return;
        };

        let outcome = {
            let _busy = BusyGuard::engage(&self.view);
            self.api.shorten(&url).await
        };

        match outcome {
            Ok(result) => {
                info!("Shortened {} to {}", result.original_url, result.short_url);
                self.view.show_result(&result);
                self.view.set_input_value("");
                self.show_toast(SHORTENED_MESSAGE, ToastKind::Success);
                self.load_recent().await;
            }
            Err(e) => {
                if matches!(e, ApiError::Rejected(_)) {
                    warn!("Shorten rejected: {}", e);
                } else {
                    error!("Shorten failed: {}", e);
                }
                self.show_toast(&e.toast_message(), ToastKind::Error);
            }
        }
    }

    /// Fetch and render the recent list, replacing what was there
    pub async fn load_recent(&self) {
        let listing = match self.api.recent().await {
            Ok(records) if records.is_empty() => RecentListing::Empty,
            Ok(records) => {
                debug!("Loaded {} recent URLs", records.len());
                let now = self.scheduler.now();
                RecentListing::Cards(
                    records
                        .into_iter()
                        .map(|record| CardEntry {
                            age: describe_created_at(&record.created_at, now),
                            record,
                        })
                        .collect(),
                )
            }
            Err(e) => {
                error!("Error loading recent URLs: {}", e);
                RecentListing::Failed
            }
        };

        self.view.render_recent(listing, self.card_copy_callback());
    }

    /// Card click: copy that card's short URL
    pub async fn copy_card_url(&self, short_url: &str) {
        if let Err(e) = self.clipboard.write_text(short_url).await {
            warn!("Clipboard API failed ({}), using scratch field", e);
            if let Err(e) = self.clipboard.copy_via_scratch_field(short_url) {
                warn!("Fallback copy failed: {}", e);
            }
        }
        self.show_toast(COPIED_MESSAGE, ToastKind::Success);
    }

    /// Copy button next to the result
    pub async fn copy_result(&self) {
        let short_url = self.view.short_url_output();

        if let Err(e) = self.clipboard.write_text(&short_url).await {
            warn!("Clipboard API failed ({}), copying selection", e);
            self.view.select_short_url_output();
            if let Err(e) = self.clipboard.copy_selection() {
                warn!("Fallback copy failed: {}", e);
            }
        }

        self.show_toast(COPIED_MESSAGE, ToastKind::Success);
        self.view.set_copy_label(CopyLabel::Copied);

        let this = self.this.clone();
        let handle = self.scheduler.schedule(
            self.copied_reset_ms,
            Box::new(move || {
                if let Some(this) = this.upgrade() {
                    this.view.set_copy_label(CopyLabel::Copy);
                }
            }),
        );
        self.copy_label_timer.arm(handle);
    }

    /// Input listener
    pub fn validate_input(&self) {
        self.view.set_submit_enabled(accepts_input(&self.view.input_value()));
    }

    pub async fn handle_shortcut(&self, shortcut: Shortcut) {
        debug!("Shortcut {:?}", shortcut);
        match shortcut {
            Shortcut::Submit => self.submit().await,
            Shortcut::ClearInput => {
                self.view.set_input_value("");
                self.view.focus_input();
            }
        }
    }

    /// Show a toast; a newer toast replaces both the text and the timer
    pub fn show_toast(&self, message: &str, kind: ToastKind) {
        self.view.show_toast(message, kind);

        let this = self.this.clone();
        let handle = self.scheduler.schedule(
            self.toast_duration_ms,
            Box::new(move || {
                if let Some(this) = this.upgrade() {
                    this.view.hide_toast();
                }
            }),
        );
        self.toast_timer.arm(handle);
    }

    fn card_copy_callback(&self) -> Callback<String> {
        let this = self.this.clone();
        Callback::from(move |short_url: String| {
            if let Some(this) = this.upgrade() {
                wasm_bindgen_futures::spawn_local(async move {
                    this.copy_card_url(&short_url).await;
                });
            }
        })
    }
}
