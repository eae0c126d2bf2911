//! Read/fill rendering of a whole form: name, rows, and field blocks.

use leptos::prelude::*;

use grid::element::FieldElement;
use grid::matrix::FormMatrix;
use grid::schema::RenderContext;

use crate::components::field_controls::FieldControls;

/// A full form rendered for the fill, preview, or viewer context.
///
/// Row and column order is document order; each field takes its
/// percentage-width share of the row.
#[component]
pub fn FormSheet(name: String, matrix: FormMatrix, context: RenderContext) -> impl IntoView {
    view! {
        <div class="form-sheet">
            <h1 class="form-sheet__name">{name}</h1>
            {matrix
                .rows()
                .iter()
                .map(|row| {
                    view! {
                        <div class="form-sheet__row">
                            {row
                                .iter()
                                .map(|element| {
                                    view! { <FieldBlock element=element.clone() context=context/> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// One field: label, required marker, help text, then the shared controls.
#[component]
pub fn FieldBlock(element: FieldElement, context: RenderContext) -> impl IntoView {
    let style = format!("flex: 0 0 {}%", element.width);
    let label = element.label.clone();
    let help = element.help_text.clone();
    let required = element.required;

    view! {
        <div class="form-sheet__field" style=style>
            <div class="form-sheet__label">
                <span>{label}</span>
                {required.then(|| view! { <span class="form-sheet__required">"*"</span> })}
            </div>
            {(!help.is_empty()).then(|| view! { <p class="form-sheet__help">{help}</p> })}
            <FieldControls element=element context=context/>
        </div>
    }
}
