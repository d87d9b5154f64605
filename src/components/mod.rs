//! Shared UI pieces used across surfaces and panels.

pub mod guest;

use leptos::prelude::*;

/// State of a remotely fetched value. Panels keep `Failed` alongside the
/// last good data; templates render `Loading` as their suspension state.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="w-8 h-8 border-2 border-slate-300 border-t-transparent rounded-full animate-spin"></div>
        </div>
    }
}

/// Dismissible inline failure message. Sibling content stays mounted;
/// dismissing only clears the message.
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    on_dismiss: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|text| view! {
                <div class="flex items-center justify-between bg-red-50 border border-red-200 text-red-700 text-sm rounded-lg px-4 py-3 mb-4">
                    <span>{text}</span>
                    <button
                        class="ml-4 font-bold text-red-400 hover:text-red-600"
                        on:click=move |_| on_dismiss.set(None)
                    >
                        "x"
                    </button>
                </div>
            })
        }}
    }
}
