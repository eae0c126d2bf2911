//! Fill page — the form as respondents see it, with live inputs.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use grid::schema::RenderContext;

use crate::components::form_sheet::FormSheet;
use crate::pages::sheet::fetch_snapshot;

/// Fill page — interactive inputs awaiting submission data. Submission
/// itself is handled by the external entries service.
#[component]
pub fn FillPage() -> impl IntoView {
    let params = use_params_map();
    let snapshot = LocalResource::new(move || {
        let raw_id = params.read().get("id");
        async move { fetch_snapshot(raw_id).await }
    });

    view! {
        <div class="sheet-page sheet-page--fill">
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
                                        context=RenderContext::Fill
                                    />
                                    <button class="btn btn--primary sheet-page__submit">
                                        "Submit"
                                    </button>
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
