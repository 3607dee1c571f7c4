//! Homepage: generate advertisement copy from an uploaded product description.

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::net::types::{AdRequest, FdaGuideline, GeneratedAd};
use crate::state::documents::DocumentsState;

/// Target markets offered in the location picker.
pub const COUNTRIES: &[&str] = &["United States", "France", "Mexico", "Italy", "Germany", "Brazil"];

pub(crate) fn parse_fda_choice(raw: &str) -> FdaGuideline {
    if raw == "No" { FdaGuideline::Ignore } else { FdaGuideline::Follow }
}

pub(crate) fn build_ad_request(document_id: &str, location: &str, fda: FdaGuideline) -> Result<AdRequest, &'static str> {
    if document_id.is_empty() {
        return Err("Choose a product description first.");
    }
    if !COUNTRIES.contains(&location) {
        return Err("Choose a target country.");
    }
    Ok(AdRequest { document_id: document_id.to_owned(), location: location.to_owned(), fda })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let docs = expect_context::<RwSignal<DocumentsState>>();
    let document_id = RwSignal::new(String::new());
    let location = RwSignal::new(COUNTRIES[0].to_owned());
    let fda = RwSignal::new(FdaGuideline::Follow);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let result = RwSignal::new(None::<GeneratedAd>);

    Effect::new(move || {
        if !docs.with_untracked(|d| d.loaded) {
            super::refresh_documents(docs, info);
        }
    });

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match build_ad_request(&document_id.get(), &location.get(), fda.get()) {
            Ok(r) => r,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        result.set(None);
        info.set("Generating...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_ad(&request).await {
                Ok(ad) => {
                    result.set(Some(ad));
                    info.set(String::new());
                }
                Err(e) => info.set(format!("Generation failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <section class="page home-page">
            <h1>"Generate Advertisement"</h1>
            <form class="ad-form" on:submit=on_generate>
                <label class="ad-form__label">
                    "Product description"
                    <select
                        class="ad-form__select"
                        prop:value=move || document_id.get()
                        on:change=move |ev| document_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select a document"</option>
                        {move || {
                            docs.get()
                                .items
                                .into_iter()
                                .map(|d| view! { <option value=d.id>{d.name}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="ad-form__label">
                    "Target country"
                    <select
                        class="ad-form__select"
                        prop:value=move || location.get()
                        on:change=move |ev| location.set(event_target_value(&ev))
                    >
                        {COUNTRIES
                            .iter()
                            .map(|&c| view! { <option value=c>{c}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="ad-form__label">
                    "Follow FDA prescription drug advertising guidance"
                    <select
                        class="ad-form__select"
                        on:change=move |ev| fda.set(parse_fda_choice(&event_target_value(&ev)))
                    >
                        <option value="Yes">"Yes"</option>
                        <option value="No">"No"</option>
                    </select>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Generate"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="page__message">{move || info.get()}</p>
            </Show>
            {move || {
                result
                    .get()
                    .map(|ad| {
                        view! {
                            <article class="ad-preview">
                                <p class="ad-preview__brand">{ad.brand}</p>
                                <h2 class="ad-preview__title">{ad.title}</h2>
                                <p class="ad-preview__summary">{ad.summary}</p>
                            </article>
                        }
                    })
            }}
        </section>
    }
}
