//! Upload page: add product descriptions for ad generation.

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::state::documents::DocumentsState;

/// Size ceilings are the server's call (`413`); only obvious mistakes are
/// caught here.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn check_selected_file(name: &str, size: f64) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Choose a file to upload.");
    }
    if size <= 0.0 {
        return Err("The selected file is empty.");
    }
    Ok(())
}

pub(crate) fn format_size(bytes: i64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let b = bytes as f64;
    if b < 1024.0 {
        format!("{bytes} B")
    } else if b < 1024.0 * 1024.0 {
        format!("{:.1} KB", b / 1024.0)
    } else {
        format!("{:.1} MB", b / (1024.0 * 1024.0))
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let docs = expect_context::<RwSignal<DocumentsState>>();
    let file_input = NodeRef::<leptos::html::Input>::new();
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        if !docs.with_untracked(|d| d.loaded) {
            super::refresh_documents(docs, info);
        }
    });

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                info.set("Choose a file to upload.".to_owned());
                return;
            };
            if let Err(msg) = check_selected_file(&file.name(), file.size()) {
                info.set(msg.to_owned());
                return;
            }
            busy.set(true);
            info.set("Uploading...".to_owned());
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_document(&file).await {
                    Ok(doc) => {
                        info.set(format!("Uploaded {}.", doc.name));
                        docs.update(|d| d.prepend(doc));
                        if let Some(input) = file_input.get() {
                            input.set_value("");
                        }
                    }
                    Err(e) => info.set(format!("Upload failed: {e}")),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <section class="page upload-page">
            <h1>"Upload Product Description"</h1>
            <form class="upload-form" on:submit=on_upload>
                <input class="upload-form__file" type="file" accept=".txt,.md,text/plain" node_ref=file_input/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Upload"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="page__message">{move || info.get()}</p>
            </Show>
            <h2>"Documents"</h2>
            <ul class="document-list">
                {move || {
                    docs.get()
                        .items
                        .into_iter()
                        .map(|d| {
                            view! {
                                <li class="document-list__item">
                                    <span class="document-list__name">{d.name}</span>
                                    <span class="document-list__meta">{format_size(d.size)}</span>
                                    <span class="document-list__meta">{d.created_at}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
