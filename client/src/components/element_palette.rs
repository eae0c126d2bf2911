//! Palette of addable field types for the builder sidebar.

use leptos::prelude::*;

use grid::element::FieldType;
use grid::registry;

use crate::state::editor::EditorState;

/// Sidebar list of field types. Clicking an entry appends a new element of
/// that type to the last row (or starts the first row) and opens it for
/// editing.
#[component]
pub fn ElementPalette() -> impl IntoView {
    let state = expect_context::<RwSignal<EditorState>>();

    view! {
        <div class="element-palette">
            <h2 class="element-palette__title">"Add Field"</h2>
            <div class="element-palette__items">
                {FieldType::ALL
                    .into_iter()
                    .map(|field_type| {
                        let on_add = move |_| {
                            state.update(|s| {
                                s.with_editor(|editor| {
                                    let rows = editor.matrix().row_count();
                                    let added = if rows == 0 {
                                        editor.append_row()
                                    } else {
                                        editor.append_column(rows - 1)
                                    };
                                    if added.is_some() {
                                        editor.begin_edit();
                                        editor.set_draft_type(field_type);
                                        editor.commit_draft();
                                        editor.begin_edit();
                                    }
                                });
                            });
                        };
                        // The icon is applied from the data-icon attribute by
                        // the stylesheet; with no asset for the key the entry
                        // degrades to its text label.
                        view! {
                            <button
                                type="button"
                                class="element-palette__item"
                                data-icon=field_type.icon_name()
                                on:click=on_add
                            >
                                {registry::default_label(field_type)}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
