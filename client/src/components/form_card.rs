//! Reusable card component for form list items on the dashboard.

use leptos::prelude::*;

/// A card representing one form, with links into each consumption context
/// and a delete action.
#[component]
pub fn FormCard(id: String, name: String, on_deleted: Callback<()>) -> impl IntoView {
    let build_href = format!("/forms/build/{id}");
    let fill_href = format!("/forms/fill/{id}");
    let preview_href = format!("/forms/preview/{id}");
    let error = RwSignal::new(None::<String>);

    let on_delete = move |_| {
        let id = id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_form(&id).await {
                Ok(()) => on_deleted.run(()),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="form-card">
            <a class="form-card__name" href=build_href>
                {name}
            </a>
            <div class="form-card__links">
                <a class="form-card__link" href=fill_href>
                    "Fill"
                </a>
                <a class="form-card__link" href=preview_href>
                    "Preview"
                </a>
                <button class="form-card__delete" title="Delete form" on:click=on_delete>
                    "\u{00d7}"
                </button>
            </div>
            {move || error.get().map(|message| view! { <p class="form-card__error">{message}</p> })}
        </div>
    }
}
