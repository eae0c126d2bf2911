//! Read-only form pages: preview and viewer.
//!
//! Both load the persisted snapshot and render it through the same
//! [`FormSheet`] as the fill page; only the [`RenderContext`] differs.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use grid::document::{FormId, FormSnapshot};
use grid::repo::FormRepository;
use grid::schema::RenderContext;

use crate::components::form_sheet::FormSheet;
use crate::net::api::HttpFormRepository;

/// Pre-publish preview: disabled controls with placeholder text.
#[component]
pub fn PreviewPage() -> impl IntoView {
    view! { <SheetPage context=RenderContext::Preview/> }
}

/// Read-only viewer: disabled controls, no data entry.
#[component]
pub fn ViewerPage() -> impl IntoView {
    view! { <SheetPage context=RenderContext::Viewer/> }
}

/// Shared loader for the snapshot-rendering pages.
#[component]
pub fn SheetPage(context: RenderContext) -> impl IntoView {
    let params = use_params_map();
    let snapshot = LocalResource::new(move || {
        let raw_id = params.read().get("id");
        async move { fetch_snapshot(raw_id).await }
    });

    view! {
        <div class="sheet-page">
            <Suspense fallback=move || view! { <p>"Loading form..."</p> }>
                {move || {
                    snapshot
                        .get()
                        .map(|result| match result {
                            Ok(snapshot) => {
                                view! {
                                    <FormSheet
                                        name=snapshot.name
                                        matrix=snapshot.json
                                        context=context
                                    />
                                }
                                    .into_any()
                            }
                            Err(message) => {
                                view! { <p class="sheet-page__error">{message}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Load a form snapshot by its raw route parameter.
///
/// # Errors
///
/// Returns a user-facing message for a missing/malformed id or a backend
/// failure.
pub async fn fetch_snapshot(raw_id: Option<String>) -> Result<FormSnapshot, String> {
    let Some(raw_id) = raw_id else {
        return Err("missing form id".to_owned());
    };
    let form_id = raw_id
        .parse::<FormId>()
        .map_err(|_| format!("invalid form id {raw_id:?}"))?;
    HttpFormRepository
        .load(form_id)
        .await
        .map_err(|e| e.to_string())
}
