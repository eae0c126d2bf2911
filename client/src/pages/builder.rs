//! Builder page — the form editing workspace.
//!
//! Loads the form named in the route into a `grid::editor::FormEditor`,
//! then composes the palette, the canvas, and the property editor around
//! the shared [`EditorState`] signal. Saving serializes the whole document
//! through the HTTP repository; failures surface in the header and leave
//! the in-memory document untouched for retry.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use grid::document::FormId;
use grid::schema::RenderContext;

use crate::components::builder_canvas::BuilderCanvas;
use crate::components::element_palette::ElementPalette;
use crate::components::form_sheet::FormSheet;
use crate::components::property_editor::PropertyEditor;
use crate::net::api::HttpFormRepository;
use crate::state::editor::{BuilderTab, EditorState};
use crate::util::time::now_ms;

/// Builder page — reads the form id from the route, loads the document, and
/// hosts the editing workspace.
#[component]
pub fn BuilderPage() -> impl IntoView {
    let state = expect_context::<RwSignal<EditorState>>();
    let params = use_params_map();

    // Reset and load whenever the route param changes.
    Effect::new(move || {
        let Some(raw_id) = params.read().get("id") else {
            return;
        };
        state.set(EditorState { loading: true, ..Default::default() });
        let Ok(form_id) = raw_id.parse::<FormId>() else {
            state.update(|s| {
                s.loading = false;
                s.set_error(format!("invalid form id {raw_id:?}"));
            });
            return;
        };
        leptos::task::spawn_local(async move {
            let (editor, error) = grid::editor::load_form(&HttpFormRepository, form_id, now_ms()).await;
            state.update(|s| {
                s.loading = false;
                s.editor = Some(editor);
                if let Some(message) = error {
                    s.set_error(message);
                }
            });
        });
    });

    on_cleanup(move || {
        // The document is discarded on navigation away without saving.
        state.set(EditorState::default());
    });

    let on_save = move |_| {
        let Some(mut editor) = state.get_untracked().editor else {
            return;
        };
        state.update(|s| {
            s.save_pending = true;
            s.status = None;
        });
        leptos::task::spawn_local(async move {
            let result = editor.save(&HttpFormRepository, None, now_ms()).await;
            state.update(|s| {
                s.save_pending = false;
                match result {
                    Ok(()) => {
                        s.editor = Some(editor);
                        s.set_info("Form saved");
                    }
                    Err(err) => s.set_error(err.to_string()),
                }
            });
        });
    };

    let tab = move || state.get().tab;
    let form_name = move || {
        state
            .get()
            .editor
            .as_ref()
            .map(|e| e.document().metadata.name.clone())
            .unwrap_or_default()
    };
    let status_view = move || {
        state.get().status.map(|status| {
            let class =
                if status.is_error { "builder-page__status builder-page__status--error" } else { "builder-page__status" };
            view! { <p class=class>{status.text}</p> }
        })
    };

    view! {
        <div class="builder-page">
            <header class="builder-page__header">
                <input
                    class="builder-page__name"
                    type="text"
                    placeholder="Form Name"
                    prop:value=form_name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.with_editor(|e| e.set_name(&value)));
                    }
                />

                <div class="builder-page__tabs">
                    <TabButton label="Edit" target=BuilderTab::Edit/>
                    <TabButton label="Preview" target=BuilderTab::Preview/>
                </div>

                <div class="builder-page__history">
                    <button
                        class="btn"
                        title="Undo"
                        disabled=move || !state.get().editor.as_ref().is_some_and(grid::editor::FormEditor::can_undo)
                        on:click=move |_| state.update(|s| s.with_editor(grid::editor::FormEditor::undo))
                    >
                        "Undo"
                    </button>
                    <button
                        class="btn"
                        title="Redo"
                        disabled=move || !state.get().editor.as_ref().is_some_and(grid::editor::FormEditor::can_redo)
                        on:click=move |_| state.update(|s| s.with_editor(grid::editor::FormEditor::redo))
                    >
                        "Redo"
                    </button>
                </div>

                <button
                    class="btn btn--primary builder-page__save"
                    disabled=move || state.get().save_pending
                    on:click=on_save
                >
                    {move || if state.get().save_pending { "Saving..." } else { "Save" }}
                </button>
            </header>

            {status_view}

            <div class="builder-page__body">
                <aside class="builder-page__sidebar">
                    <ElementPalette/>
                    <PropertyEditor/>
                </aside>

                <main class="builder-page__main">
                    {move || match tab() {
                        BuilderTab::Edit => view! { <BuilderCanvas/> }.into_any(),
                        BuilderTab::Preview => {
                            let s = state.get();
                            match s.editor.as_ref() {
                                Some(editor) => {
                                    view! {
                                        <FormSheet
                                            name=editor.document().metadata.name.clone()
                                            matrix=editor.matrix().clone()
                                            context=RenderContext::Preview
                                        />
                                    }
                                        .into_any()
                                }
                                None => view! { <p>"Loading form..."</p> }.into_any(),
                            }
                        }
                    }}
                </main>
            </div>
        </div>
    }
}

/// One builder tab selector.
#[component]
fn TabButton(label: &'static str, target: BuilderTab) -> impl IntoView {
    let state = expect_context::<RwSignal<EditorState>>();
    let class = move || {
        if state.get().tab == target {
            "builder-page__tab builder-page__tab--active"
        } else {
            "builder-page__tab"
        }
    };

    view! {
        <button class=class on:click=move |_| state.update(|s| s.tab = target)>
            {label}
        </button>
    }
}
