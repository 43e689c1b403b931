//! Slide-over panel with a document's metadata and extracted text chunks.

use leptos::prelude::*;

use crate::net::types::DocumentDetail;
use crate::state::documents::status_modifier;
use crate::util::format::{format_bytes, format_timestamp};

#[component]
pub fn DocumentDetailPanel(detail: DocumentDetail, on_close: Callback<()>) -> impl IntoView {
    let document = detail.document;
    let status = document.status;
    let metadata = document
        .metadata
        .as_ref()
        .filter(|m| !m.is_null())
        .and_then(|m| serde_json::to_string_pretty(m).ok());
    let processed = document.processed_at.as_deref().map(format_timestamp);

    let chunks = detail
        .chunks
        .into_iter()
        .map(|chunk| {
            view! {
                <li class="document-detail__chunk">
                    <span class="document-detail__chunk-index">{format!("#{}", chunk.chunk_index + 1)}</span>
                    <p>{chunk.content}</p>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <aside class="document-detail" on:click=move |ev| ev.stop_propagation()>
                <header class="document-detail__header">
                    <h2>{document.filename}</h2>
                    <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                </header>
                <dl class="document-detail__meta">
                    <dt>"Status"</dt>
                    <dd>
                        <span class=format!("status-pill status-pill--{}", status_modifier(status))>
                            {status.as_str()}
                        </span>
                    </dd>
                    <dt>"Uploaded"</dt>
                    <dd>{format_timestamp(&document.created_at)}</dd>
                    <dt>"Processed"</dt>
                    <dd>{processed.unwrap_or_else(|| "-".to_owned())}</dd>
                    <dt>"Size"</dt>
                    <dd>{format_bytes(document.file_size)}</dd>
                    <dt>"Chunks"</dt>
                    <dd>{detail.chunk_count}</dd>
                </dl>
                {document
                    .error_message
                    .map(|msg| view! { <p class="document-detail__error">{msg}</p> })}
                {metadata.map(|json| view! { <pre class="document-detail__metadata">{json}</pre> })}
                <ol class="document-detail__chunks">{chunks}</ol>
            </aside>
        </div>
    }
}
