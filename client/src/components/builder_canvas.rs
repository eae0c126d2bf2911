//! The editable form canvas: rows and columns of selectable field cells.
//!
//! Every gesture here routes through the `grid` engine via the shared
//! [`EditorState`] signal: caret buttons call the neighbor-swap move,
//! expand/shrink call the width-redistributing resize, the add buttons
//! insert placeholder rows/columns, and clicking the canvas background
//! deselects.

use leptos::prelude::*;

use grid::element::{FieldElement, FieldId};
use grid::matrix::MoveDirection;
use grid::schema::RenderContext;

use crate::components::field_controls::FieldControls;
use crate::state::editor::EditorState;

/// Width step applied by one click of the expand/shrink controls.
const RESIZE_STEP: f64 = 10.0;

/// The builder canvas for the currently loaded form.
#[component]
pub fn BuilderCanvas() -> impl IntoView {
    let state = expect_context::<RwSignal<EditorState>>();

    let body = move || {
        let s = state.get();
        let Some(editor) = s.editor.as_ref() else {
            return view! { <p class="builder-canvas__empty">"Loading form..."</p> }.into_any();
        };
        let selected = editor.selected_id();
        let rows: Vec<Vec<FieldElement>> = editor.matrix().rows().to_vec();
        let empty = rows.is_empty();

        view! {
            <div class="builder-canvas__rows">
                {empty
                    .then(|| view! { <p class="builder-canvas__empty">"Add a field to get started"</p> })}
                {rows
                    .into_iter()
                    .enumerate()
                    .map(|(row_idx, row)| {
                        let cols = row.len();
                        view! {
                            <div class="builder-canvas__row">
                                {row
                                    .into_iter()
                                    .enumerate()
                                    .map(|(col_idx, element)| {
                                        element_cell(state, element, row_idx, col_idx, cols, selected)
                                    })
                                    .collect::<Vec<_>>()}
                                <button
                                    type="button"
                                    class="builder-canvas__add"
                                    title="Add field to row"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        state.update(|s| {
                                            s.with_editor(|e| {
                                                e.append_column(row_idx);
                                                e.begin_edit();
                                            });
                                        });
                                    }
                                >
                                    "+"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button
                    type="button"
                    class="builder-canvas__add builder-canvas__add--row"
                    title="Add row"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        state.update(|s| {
                            s.with_editor(|e| {
                                e.append_row();
                                e.begin_edit();
                            });
                        });
                    }
                >
                    "+ Row"
                </button>
            </div>
        }
        .into_any()
    };

    view! {
        <div
            class="builder-canvas"
            on:click=move |_| {
                state.update(|s| s.with_editor(grid::editor::FormEditor::deselect));
            }
        >
            {body}
        </div>
    }
}

/// One selectable field cell with its move/resize/delete chrome.
fn element_cell(
    state: RwSignal<EditorState>,
    element: FieldElement,
    row_idx: usize,
    col_idx: usize,
    cols: usize,
    selected: Option<FieldId>,
) -> AnyView {
    let id = element.id;
    let width = element.width;
    let is_selected = selected == Some(id);
    let class = if is_selected {
        "builder-canvas__cell builder-canvas__cell--selected"
    } else {
        "builder-canvas__cell"
    };
    let style = format!("flex: 0 0 {width}%");
    let label = element.label.clone();
    let help = if element.help_text.is_empty() {
        "Help Text (optional)".to_owned()
    } else {
        element.help_text.clone()
    };

    let act = move |f: fn(&mut grid::editor::FormEditor, usize, usize)| {
        state.update(|s| s.with_editor(|e| f(e, row_idx, col_idx)));
    };

    view! {
        <div
            class=class
            style=style
            on:click=move |ev| {
                ev.stop_propagation();
                state.update(|s| {
                    s.with_editor(|e| {
                        e.select(id);
                        e.begin_edit();
                    });
                });
            }
        >
            <button
                type="button"
                class="builder-canvas__caret"
                title="Move left"
                disabled=move || col_idx == 0
                on:click=move |ev| {
                    ev.stop_propagation();
                    act(|e, r, c| e.move_element(r, c, MoveDirection::Left));
                }
            >
                "\u{2039}"
            </button>

            <div class="builder-canvas__main">
                <div class="builder-canvas__header">
                    <span class="builder-canvas__label">{label}</span>
                    <span class="builder-canvas__tools">
                        <button
                            type="button"
                            class="builder-canvas__tool"
                            title="Widen"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                state.update(|s| {
                                    s.with_editor(|e| {
                                        e.resize_element(row_idx, col_idx, width + RESIZE_STEP);
                                    });
                                });
                            }
                        >
                            "\u{2194}"
                        </button>
                        <button
                            type="button"
                            class="builder-canvas__tool"
                            title="Narrow"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                state.update(|s| {
                                    s.with_editor(|e| {
                                        e.resize_element(row_idx, col_idx, width - RESIZE_STEP);
                                    });
                                });
                            }
                        >
                            "\u{2934}"
                        </button>
                        <button
                            type="button"
                            class="builder-canvas__tool builder-canvas__tool--delete"
                            title="Delete"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                act(grid::editor::FormEditor::delete_element);
                            }
                        >
                            "\u{00d7}"
                        </button>
                    </span>
                </div>
                <p class="builder-canvas__help">{help}</p>
                <FieldControls element=element context=RenderContext::Builder/>
            </div>

            <button
                type="button"
                class="builder-canvas__caret"
                title="Move right"
                disabled=move || { col_idx + 1 >= cols }
                on:click=move |ev| {
                    ev.stop_propagation();
                    act(|e, r, c| e.move_element(r, c, MoveDirection::Right));
                }
            >
                "\u{203a}"
            </button>
        </div>
    }
    .into_any()
}
