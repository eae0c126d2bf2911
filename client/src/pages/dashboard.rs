//! Dashboard page listing forms with create and open actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_card::FormCard;
use crate::net::api;
use crate::state::forms::FormListItem;

/// Dashboard page — shows the form list and a create-form dialog.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let forms = LocalResource::new(|| api::fetch_forms());

    let show_create = RwSignal::new(false);
    let new_form_name = RwSignal::new(String::new());

    let on_create = move |_| {
        show_create.set(true);
        new_form_name.set(String::new());
    };
    let on_cancel = Callback::new(move |()| show_create.set(false));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Forms"</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Form"
                </button>
            </header>

            <div class="dashboard-page__grid">
                <Suspense fallback=move || view! { <p>"Loading forms..."</p> }>
                    {move || {
                        forms
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    let on_deleted = Callback::new(move |()| forms.refetch());
                                    view! {
                                        <div class="dashboard-page__cards">
                                            {list
                                                .into_iter()
                                                .map(|form: FormListItem| {
                                                    view! {
                                                        <FormCard
                                                            id=form.id
                                                            name=form.name
                                                            on_deleted=on_deleted
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(message) => {
                                    view! { <p class="dashboard-page__error">{message}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <Show when=move || show_create.get()>
                <CreateFormDialog name=new_form_name on_cancel=on_cancel/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating a new form. A backend-issued id is required
/// before the builder can open, so creation navigates only on success.
#[component]
fn CreateFormDialog(name: RwSignal<String>, on_cancel: Callback<()>) -> impl IntoView {
    let navigate = use_navigate();
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let form_name = name.get().trim().to_owned();
        if form_name.is_empty() {
            error.set(Some("Form name is required".to_owned()));
            return;
        }
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_form(&form_name).await {
                Ok(id) => {
                    navigate(&format!("/forms/build/{id}"), NavigateOptions::default());
                }
                Err(message) => error.set(Some(message)),
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Form"</h2>
                <label class="dialog__label">
                    "Form Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="dialog__error">{message}</p> })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
