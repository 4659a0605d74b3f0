/// Recent URL cards

use crate::relative_date::RelativeDate;
use crate::view::{CardEntry, RecentListing};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// Latest listing and the card click handler that goes with it
#[derive(Clone, PartialEq)]
pub struct RecentUpdate {
    pub listing: RecentListing,
    /// Emits the short URL of the clicked card
    pub on_copy: Callback<String>,
}

/// Channel from the page binding into the mounted `RecentList`
///
/// Updates pushed before the component has attached are held and
/// delivered on attach.
#[derive(Clone, Default)]
pub struct RecentFeed {
    receiver: Rc<RefCell<Option<Callback<RecentUpdate>>>>,
    pending: Rc<RefCell<Option<RecentUpdate>>>,
}

impl PartialEq for RecentFeed {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.receiver, &other.receiver)
    }
}

impl RecentFeed {
    pub fn push(&self, update: RecentUpdate) {
        let receiver = self.receiver.borrow().clone();
        match receiver {
            Some(receiver) => receiver.emit(update),
            None => *self.pending.borrow_mut() = Some(update),
        }
    }

    fn attach(&self, receiver: Callback<RecentUpdate>) {
        *self.receiver.borrow_mut() = Some(receiver.clone());
        let pending = self.pending.borrow_mut().take();
        if let Some(update) = pending {
            receiver.emit(update);
        }
    }

    fn detach(&self) {
        self.receiver.borrow_mut().take();
    }
}

#[derive(Properties, PartialEq)]
pub struct RecentListProps {
    pub feed: RecentFeed,
}

/// Mounted once; every refresh arrives through the feed
#[function_component(RecentList)]
pub fn recent_list(props: &RecentListProps) -> Html {
    let current = use_state(|| None::<RecentUpdate>);

    {
        let current = current.clone();
        use_effect_with(props.feed.clone(), move |feed| {
            feed.attach(Callback::from(move |update| current.set(Some(update))));
            let feed = feed.clone();
            move || feed.detach()
        });
    }

    let Some(update) = (*current).clone() else {
        return html! {};
    };

    match &update.listing {
        RecentListing::Cards(cards) => html! {
            <>
                {for cards.iter().map(|entry| html! {
                    <UrlCard
                        key={entry.record.short_code.clone()}
                        entry={entry.clone()}
                        on_copy={update.on_copy.clone()}
                    />
                })}
            </>
        },
        other => html! {
            <div class="loading">{other.placeholder().unwrap_or_default()}</div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct UrlCardProps {
    pub entry: CardEntry,
    pub on_copy: Callback<String>,
}

#[function_component(UrlCard)]
pub fn url_card(props: &UrlCardProps) -> Html {
    let record = &props.entry.record;

    let onclick = props.on_copy.reform({
        let short_url = record.short_url.clone();
        move |_: MouseEvent| short_url.clone()
    });

    html! {
        <div class="url-card" title={record.short_code.clone()} {onclick}>
            <h4>{"Shortened URL"}</h4>
            <div class="short-url">{&record.short_url}</div>
            <div class="original-url">{&record.original_url}</div>
            <div class="stats">
                <span><i class="fas fa-calendar"></i>{" "}{age_label(&props.entry.age)}</span>
                <span>
                    <i class="fas fa-mouse-pointer"></i>{format!(" {} clicks", record.clicks)}
                </span>
            </div>
        </div>
    }
}

/// Card label, with calendar dates in the browser's locale
pub fn age_label(age: &RelativeDate) -> String {
    match age {
        RelativeDate::OnDate(date) => {
            let millis = JsValue::from_f64(date.timestamp_millis() as f64);
            js_sys::Date::new(&millis)
                .to_locale_date_string("default", &JsValue::UNDEFINED)
                .into()
        }
        other => other.to_string(),
    }
}
