//! Toast notification overlay.
//!
//! Renders the notice feed as transient banners. Each toast dismisses
//! itself after `NOTICE_DURATION_MS` or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::NOTICE_DURATION_MS;
use crate::core::notify::NoticeFeed;
use crate::models::{Notice, NoticeKind};

stylance::import_crate_style!(css, "src/components/toast.module.css");

/// Overlay rendering the notice feed.
#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let feed = ctx.notices;
    let notices = feed.notices();

    view! {
        <div class=css::stack>
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice: Notice| view! { <ToastItem notice feed /> }
            />
        </div>
    }
}

/// A single toast with an auto-dismiss timer.
#[component]
fn ToastItem(notice: Notice, feed: NoticeFeed) -> impl IntoView {
    let id = notice.id;

    // schedule auto-dismissal when the toast mounts
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_DURATION_MS).await;
        feed.dismiss(id);
    });

    let kind_class = match notice.kind {
        NoticeKind::Info => css::info,
        NoticeKind::Success => css::success,
        NoticeKind::Error => css::error,
    };

    view! {
        <div class=format!("{} {}", css::toast, kind_class)>
            <span class=css::message>{notice.message}</span>
            <button class=css::close on:click=move |_| feed.dismiss(id)>
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}
