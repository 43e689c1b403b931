//! Documents page: upload, folder scan, detail view, and rule extraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists processed policy documents, newest first, refreshed every
//! `DOCUMENTS_INTERVAL`. Uploads go to the document processor as multipart
//! form data; extraction is handed to the rule extractor and, on success,
//! navigates to the Rules view.
//!
//! ERROR HANDLING
//! ==============
//! Background refresh failures are logged and retried with backoff. Failed
//! user actions raise an alert carrying the service's `detail` text.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::document_detail::DocumentDetailPanel;
use crate::net::api;
use crate::net::types::{Document, ExtractionReceipt};
use crate::state::documents::{DocumentsState, UPLOAD_ACCEPT, can_extract, status_modifier};
use crate::util::format::{format_bytes, format_timestamp};
use crate::util::notify;
use crate::util::poll::{DOCUMENTS_INTERVAL, poll_while_mounted};
use crate::util::task;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let state = RwSignal::new(DocumentsState::default());
    poll_while_mounted("documents", DOCUMENTS_INTERVAL, move || refresh(state));
    let navigate = use_navigate();

    // Set by a successful extraction; the effect performs the route change.
    let show_rules = RwSignal::new(false);
    Effect::new(move || {
        if show_rules.get() {
            show_rules.set(false);
            navigate("/rules", NavigateOptions::default());
        }
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Err(err) = crate::state::documents::validate_upload(&file.name()) {
                input.set_value("");
                notify::action_failed("Upload", &err);
                return;
            }
            state.update(|s| s.uploading = true);
            task::spawn(async move {
                match api::upload_document(&file).await {
                    Ok(receipt) => {
                        log::info!("uploaded {} as {}", receipt.filename, receipt.document_id);
                        refresh(state).await;
                    }
                    Err(err) => notify::action_failed("Upload", &err),
                }
                state.try_update(|s| s.uploading = false);
                input.set_value("");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_folder_scan = move |_| {
        if state.get_untracked().scanning_folder {
            return;
        }
        state.update(|s| s.scanning_folder = true);
        task::spawn(async move {
            match api::scan_document_folder().await {
                Ok(receipt) => {
                    notify::alert(&format!(
                        "{} ({} found, {} queued)",
                        receipt.message, receipt.files_found, receipt.queued_for_processing
                    ));
                    refresh(state).await;
                }
                Err(err) => notify::action_failed("Folder scan", &err),
            }
            state.try_update(|s| s.scanning_folder = false);
        });
    };

    let on_refresh = move |_| {
        task::spawn(async move {
            refresh(state).await;
        });
    };

    let on_view = Callback::new(move |document_id: String| {
        state.update(|s| s.detail_loading = true);
        task::spawn(async move {
            match api::get_document(&document_id).await {
                Ok(detail) => {
                    state.try_update(|s| s.detail = Some(detail));
                }
                Err(err) => notify::action_failed("Loading the document", &err),
            }
            state.try_update(|s| s.detail_loading = false);
        });
    });

    let on_extract = Callback::new(move |document_id: String| {
        if state.get_untracked().extracting.is_some() {
            return;
        }
        state.update(|s| s.extracting = Some(document_id.clone()));
        task::spawn(async move {
            let result = api::extract_rules(&document_id).await;
            state.try_update(|s| s.extracting = None);
            match result {
                Ok(receipt) => {
                    notify::alert(&extraction_message(&receipt));
                    show_rules.try_set(true);
                }
                Err(err) => notify::action_failed("Rule extraction", &err),
            }
        });
    });

    let on_close_detail = Callback::new(move |()| state.update(DocumentsState::close_detail));

    view! {
        <div class="documents-page">
            <section class="documents-page__toolbar">
                <label class="upload" class:upload--busy=move || state.get().uploading>
                    <input
                        class="upload__input"
                        type="file"
                        accept=UPLOAD_ACCEPT
                        disabled=move || state.get().uploading
                        on:change=on_file_change
                    />
                    <span class="upload__label">
                        {move || {
                            if state.get().uploading { "Uploading & Processing..." } else { "Upload Data Policies" }
                        }}
                    </span>
                </label>
                <button class="btn" disabled=move || state.get().scanning_folder on:click=on_folder_scan>
                    {move || if state.get().scanning_folder { "Scanning..." } else { "Scan Upload Folder" }}
                </button>
                <button class="btn" on:click=on_refresh>"Refresh"</button>
                <span class="documents-page__count">
                    {move || format!("{} document(s)", state.get().items.len())}
                </span>
            </section>

            <Show
                when=move || !state.get().loading
                fallback=|| view! { <p class="muted">"Loading documents..."</p> }
            >
                <Show
                    when=move || !state.get().items.is_empty()
                    fallback=|| view! { <p class="muted">"No documents uploaded yet."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"File"</th>
                                <th>"Uploaded"</th>
                                <th>"Size"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let current = state.get();
                                current
                                    .items
                                    .into_iter()
                                    .map(|document| {
                                        let busy = current.extracting.as_deref() == Some(document.document_id.as_str());
                                        view! {
                                            <DocumentRow
                                                document=document
                                                extracting=busy
                                                on_view=on_view
                                                on_extract=on_extract
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || state.get().detail_loading>
                <p class="documents-page__detail-loading">"Loading document..."</p>
            </Show>
            {move || {
                state
                    .get()
                    .detail
                    .map(|detail| view! { <DocumentDetailPanel detail=detail on_close=on_close_detail /> })
            }}
        </div>
    }
}

#[component]
fn DocumentRow(
    document: Document,
    extracting: bool,
    on_view: Callback<String>,
    on_extract: Callback<String>,
) -> impl IntoView {
    let status = document.status;
    let extractable = can_extract(&document);
    let view_id = document.document_id.clone();
    let extract_id = document.document_id.clone();

    view! {
        <tr class="document-row">
            <td class="document-row__name">{document.filename}</td>
            <td>{format_timestamp(&document.created_at)}</td>
            <td>{format_bytes(document.file_size)}</td>
            <td>
                <span class=format!("status-pill status-pill--{}", status_modifier(status))>
                    {status.as_str()}
                </span>
            </td>
            <td class="document-row__actions">
                <button class="btn btn--small" on:click=move |_| on_view.run(view_id.clone())>
                    "View"
                </button>
                <Show when=move || extractable>
                    <button
                        class="btn btn--small btn--primary"
                        disabled=extracting
                        on:click={
                            let id = extract_id.clone();
                            move |_| on_extract.run(id.clone())
                        }
                    >
                        {if extracting { "Extracting..." } else { "Extract Rules" }}
                    </button>
                </Show>
            </td>
        </tr>
    }
}

/// Alert text after a successful extraction.
pub fn extraction_message(receipt: &ExtractionReceipt) -> String {
    match receipt.extracted_count {
        0 => "No rules were found in this document.".to_owned(),
        1 => "Extracted 1 rule.".to_owned(),
        n => format!("Extracted {n} rules."),
    }
}

/// One documents tick. Returns `false` and keeps the current list on failure.
pub async fn refresh(state: RwSignal<DocumentsState>) -> bool {
    match api::list_documents().await {
        Ok(list) => {
            state.try_update(|s| s.apply_list(list.documents));
            true
        }
        Err(err) => {
            notify::refresh_failed("documents", &err);
            state.try_update(|s| s.loading = false);
            false
        }
    }
}
