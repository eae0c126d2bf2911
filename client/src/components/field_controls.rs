//! Shared renderer for a field's sub-controls.
//!
//! Every consumption context — builder canvas, fill-in page, preview, and
//! viewer — renders fields through this one component. The control set and
//! order come from `grid::schema::control_rows`; the context contributes
//! only the disabled flag. Adding per-type branching here instead of in the
//! schema would let the contexts drift apart, which is exactly what the
//! schema layer exists to prevent.

use leptos::prelude::*;

use grid::element::FieldElement;
use grid::schema::{ControlKind, RenderContext, SubControl, control_rows};

/// The sub-controls of one field, laid out in schema order.
#[component]
pub fn FieldControls(element: FieldElement, context: RenderContext) -> impl IntoView {
    let disabled = !context.interactive();
    let rows = control_rows(&element);

    view! {
        <div class="field-controls">
            {rows
                .into_iter()
                .map(|row| {
                    view! {
                        <div class="field-controls__row">
                            {row
                                .into_iter()
                                .map(|control| control_view(control, disabled))
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

fn control_view(control: SubControl, disabled: bool) -> AnyView {
    let placeholder = control.placeholder;
    match control.kind {
        ControlKind::Text => typed_input("text", placeholder, disabled),
        ControlKind::Tel => typed_input("tel", placeholder, disabled),
        ControlKind::Email => typed_input("email", placeholder, disabled),
        ControlKind::Password => typed_input("password", placeholder, disabled),
        ControlKind::Date => typed_input("date", placeholder, disabled),
        ControlKind::Number => typed_input("number", placeholder, disabled),
        ControlKind::Url => typed_input("url", placeholder, disabled),
        ControlKind::Textarea => view! {
            <textarea class="field-controls__textarea" placeholder=placeholder disabled=disabled>
            </textarea>
        }
        .into_any(),
        ControlKind::Select { options } => view! {
            <select class="field-controls__select" disabled=disabled>
                {options
                    .into_iter()
                    .map(|option| view! { <option value=option.clone()>{option.clone()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
        ControlKind::Radio { value } => view! {
            <label class="field-controls__choice">
                <input
                    type="radio"
                    name=control.group.unwrap_or_default()
                    value=value.clone()
                    disabled=disabled
                />
                {value}
            </label>
        }
        .into_any(),
        ControlKind::Checkbox { value } => view! {
            <label class="field-controls__choice">
                <input
                    type="checkbox"
                    name=control.group.unwrap_or_default()
                    value=value.clone()
                    disabled=disabled
                />
                {value}
            </label>
        }
        .into_any(),
        ControlKind::Calculation { formula } => {
            let text = if formula.is_empty() { placeholder.to_owned() } else { formula };
            view! { <div class="field-controls__calculation">{text}</div> }.into_any()
        }
        ControlKind::Signature => {
            view! { <div class="field-controls__signature">{placeholder}</div> }.into_any()
        }
        ControlKind::FileAttach => view! {
            <div class="field-controls__file">
                <span class="field-controls__file-status">{placeholder}</span>
                <button type="button" class="btn" disabled=disabled>
                    "Attach File"
                </button>
            </div>
        }
        .into_any(),
        ControlKind::Placeholder => {
            view! { <div class="field-controls__placeholder">{placeholder}</div> }.into_any()
        }
    }
}

fn typed_input(input_type: &'static str, placeholder: &'static str, disabled: bool) -> AnyView {
    view! {
        <input
            class="field-controls__input"
            type=input_type
            placeholder=placeholder
            disabled=disabled
        />
    }
    .into_any()
}
