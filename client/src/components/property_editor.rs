//! Sidebar editor for the selected element's draft.
//!
//! Edits are buffered in the session draft and only reach the document when
//! the user commits them, so switching selection or discarding loses nothing
//! that was meant to be kept. Changing the type here resets the property
//! section below it to the new type's defaults.

use leptos::prelude::*;

use grid::element::{FieldElement, FieldProperties, FieldType};
use grid::registry;

use crate::state::editor::EditorState;

/// Property editor for the current draft, or a hint when nothing is
/// selected.
#[component]
pub fn PropertyEditor() -> impl IntoView {
    let state = expect_context::<RwSignal<EditorState>>();

    let body = move || {
        let s = state.get();
        let Some(draft) = s.editor.as_ref().and_then(|e| e.session().draft()).cloned() else {
            return view! { <p class="property-editor__empty">"Select an element to edit"</p> }
                .into_any();
        };
        draft_form(state, draft).into_any()
    };

    view! {
        <div class="property-editor" on:click=move |ev| ev.stop_propagation()>
            {body}
        </div>
    }
}

fn draft_form(state: RwSignal<EditorState>, draft: FieldElement) -> impl IntoView {
    let heading = format!("Edit {}", draft.label);
    let width_value = format!("{:.0}", draft.width);

    view! {
        <div class="property-editor__form">
            <h2 class="property-editor__title">{heading}</h2>

            <label class="property-editor__field">
                "Type"
                <select
                    class="property-editor__select"
                    prop:value=draft.field_type.as_str()
                    on:change=move |ev| {
                        if let Some(field_type) = FieldType::from_tag(&event_target_value(&ev)) {
                            state.update(|s| s.with_editor(|e| e.set_draft_type(field_type)));
                        }
                    }
                >
                    {(draft.field_type == FieldType::Unset)
                        .then(|| view! { <option value="unset">"Choose a type"</option> })}
                    {FieldType::ALL
                        .into_iter()
                        .map(|t| {
                            view! { <option value=t.as_str()>{registry::default_label(t)}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="property-editor__field">
                "Label"
                <input
                    class="property-editor__input"
                    type="text"
                    prop:value=draft.label.clone()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_draft(state, move |d| d.label = value);
                    }
                />
            </label>

            <label class="property-editor__field">
                "Help Text"
                <input
                    class="property-editor__input"
                    type="text"
                    prop:value=draft.help_text.clone()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_draft(state, move |d| d.help_text = value);
                    }
                />
            </label>

            <label class="property-editor__check">
                <input
                    type="checkbox"
                    prop:checked=draft.required
                    on:change=move |ev| {
                        let value = event_target_checked(&ev);
                        edit_draft(state, move |d| d.required = value);
                    }
                />
                "Required"
            </label>

            <label class="property-editor__field">
                "Width (%)"
                <input
                    class="property-editor__input"
                    type="number"
                    min="5"
                    max="100"
                    prop:value=width_value
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                            edit_draft(state, move |d| d.width = value.clamp(5.0, 100.0));
                        }
                    }
                />
            </label>

            {properties_section(state, &draft.properties)}

            <div class="property-editor__actions">
                <button
                    type="button"
                    class="btn btn--primary"
                    on:click=move |_| {
                        state.update(|s| s.with_editor(grid::editor::FormEditor::commit_draft));
                    }
                >
                    "Save Changes"
                </button>
                <button
                    type="button"
                    class="btn"
                    on:click=move |_| {
                        state.update(|s| s.with_editor(grid::editor::FormEditor::discard_draft));
                    }
                >
                    "Discard"
                </button>
            </div>
        </div>
    }
}

/// Apply one edit to the open draft.
fn edit_draft(state: RwSignal<EditorState>, f: impl FnOnce(&mut FieldElement)) {
    state.update(|s| {
        s.with_editor(|e| {
            if let Some(draft) = e.draft_mut() {
                f(draft);
            }
        });
    });
}

/// Apply one edit to the open draft's properties.
fn edit_properties(state: RwSignal<EditorState>, f: impl FnOnce(&mut FieldProperties)) {
    edit_draft(state, |d| f(&mut d.properties));
}

/// The type-specific section of the editor.
fn properties_section(state: RwSignal<EditorState>, properties: &FieldProperties) -> AnyView {
    match properties {
        FieldProperties::Empty {} => ().into_any(),
        FieldProperties::Textbox { multiline } => toggle_group(
            state,
            "Text",
            vec![("Multi-line", *multiline, |p, v| {
                if let FieldProperties::Textbox { multiline } = p {
                    *multiline = v;
                }
            })],
        )
        .into_any(),
        FieldProperties::Name { title, first_name, middle_initial, middle_name, last_name, suffix } => {
            toggle_group(
                state,
                "Name Parts",
                vec![
                    ("Title", *title, |p, v| {
                        if let FieldProperties::Name { title, .. } = p {
                            *title = v;
                        }
                    }),
                    ("First", *first_name, |p, v| {
                        if let FieldProperties::Name { first_name, .. } = p {
                            *first_name = v;
                        }
                    }),
                    ("Middle Initial", *middle_initial, |p, v| {
                        if let FieldProperties::Name { middle_initial, .. } = p {
                            *middle_initial = v;
                        }
                    }),
                    ("Middle", *middle_name, |p, v| {
                        if let FieldProperties::Name { middle_name, .. } = p {
                            *middle_name = v;
                        }
                    }),
                    ("Last", *last_name, |p, v| {
                        if let FieldProperties::Name { last_name, .. } = p {
                            *last_name = v;
                        }
                    }),
                    ("Suffix", *suffix, |p, v| {
                        if let FieldProperties::Name { suffix, .. } = p {
                            *suffix = v;
                        }
                    }),
                ],
            )
            .into_any()
        }
        FieldProperties::Address { address_line1, address_line2, city, state: st, zip } => {
            toggle_group(
                state,
                "Address Lines",
                vec![
                    ("Address Line 1", *address_line1, |p, v| {
                        if let FieldProperties::Address { address_line1, .. } = p {
                            *address_line1 = v;
                        }
                    }),
                    ("Address Line 2", *address_line2, |p, v| {
                        if let FieldProperties::Address { address_line2, .. } = p {
                            *address_line2 = v;
                        }
                    }),
                    ("City", *city, |p, v| {
                        if let FieldProperties::Address { city, .. } = p {
                            *city = v;
                        }
                    }),
                    ("State", *st, |p, v| {
                        if let FieldProperties::Address { state, .. } = p {
                            *state = v;
                        }
                    }),
                    ("Zip", *zip, |p, v| {
                        if let FieldProperties::Address { zip, .. } = p {
                            *zip = v;
                        }
                    }),
                ],
            )
            .into_any()
        }
        FieldProperties::Date { day, month, year } => toggle_group(
            state,
            "Date Parts",
            vec![
                ("Day", *day, |p, v| {
                    if let FieldProperties::Date { day, .. } = p {
                        *day = v;
                    }
                }),
                ("Month", *month, |p, v| {
                    if let FieldProperties::Date { month, .. } = p {
                        *month = v;
                    }
                }),
                ("Year", *year, |p, v| {
                    if let FieldProperties::Date { year, .. } = p {
                        *year = v;
                    }
                }),
            ],
        )
        .into_any(),
        FieldProperties::OptionList { options } => string_list_editor(
            state,
            "Options",
            options.clone(),
            FieldProperties::options_mut,
            |len| format!("Choice {}", len + 1),
        )
        .into_any(),
        FieldProperties::Calculation { formula } => {
            let formula = formula.clone();
            view! {
                <label class="property-editor__field">
                    "Formula"
                    <input
                        class="property-editor__input"
                        type="text"
                        prop:value=formula
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_properties(state, move |p| {
                                if let FieldProperties::Calculation { formula } = p {
                                    *formula = value;
                                }
                            });
                        }
                    />
                </label>
            }
            .into_any()
        }
        FieldProperties::File { allowed_file_types } => string_list_editor(
            state,
            "Allowed File Types",
            allowed_file_types.clone(),
            |p| match p {
                FieldProperties::File { allowed_file_types } => Some(allowed_file_types),
                _ => None,
            },
            |_| ".txt".to_owned(),
        )
        .into_any(),
    }
}

/// A titled group of property checkboxes.
fn toggle_group(
    state: RwSignal<EditorState>,
    title: &'static str,
    toggles: Vec<(&'static str, bool, fn(&mut FieldProperties, bool))>,
) -> impl IntoView {
    view! {
        <fieldset class="property-editor__group">
            <legend>{title}</legend>
            {toggles
                .into_iter()
                .map(|(label, checked, apply)| {
                    view! {
                        <label class="property-editor__check">
                            <input
                                type="checkbox"
                                prop:checked=checked
                                on:change=move |ev| {
                                    let value = event_target_checked(&ev);
                                    edit_properties(state, move |p| apply(p, value));
                                }
                            />
                            {label}
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
        </fieldset>
    }
}

/// Editor for an ordered list of strings (choice options, file extensions).
/// The last entry cannot be removed.
fn string_list_editor(
    state: RwSignal<EditorState>,
    title: &'static str,
    items: Vec<String>,
    list_of: fn(&mut FieldProperties) -> Option<&mut Vec<String>>,
    new_entry: fn(usize) -> String,
) -> impl IntoView {
    let count = items.len();

    view! {
        <fieldset class="property-editor__group">
            <legend>{title}</legend>
            {items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    view! {
                        <div class="property-editor__list-row">
                            <input
                                class="property-editor__input"
                                type="text"
                                prop:value=item
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_properties(state, move |p| {
                                        if let Some(list) = list_of(p) {
                                            if let Some(slot) = list.get_mut(index) {
                                                *slot = value;
                                            }
                                        }
                                    });
                                }
                            />
                            {(count > 1)
                                .then(|| {
                                    view! {
                                        <button
                                            type="button"
                                            class="btn btn--danger"
                                            title="Remove"
                                            on:click=move |_| {
                                                edit_properties(state, move |p| {
                                                    if let Some(list) = list_of(p) {
                                                        if list.len() > 1 && index < list.len() {
                                                            list.remove(index);
                                                        }
                                                    }
                                                });
                                            }
                                        >
                                            "\u{00d7}"
                                        </button>
                                    }
                                })}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            <button
                type="button"
                class="btn"
                on:click=move |_| {
                    edit_properties(state, move |p| {
                        if let Some(list) = list_of(p) {
                            let entry = new_entry(list.len());
                            list.push(entry);
                        }
                    });
                }
            >
                "+ Add"
            </button>
        </fieldset>
    }
}
