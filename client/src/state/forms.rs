//! Dashboard state: the list of forms the user can open.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// A form summary for dashboard lists.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormListItem {
    pub id: String,
    pub name: String,
}

/// Shared dashboard list state.
#[derive(Clone, Debug, Default)]
pub struct FormsState {
    pub items: Vec<FormListItem>,
    pub loading: bool,
    pub create_pending: bool,
    pub error: Option<String>,
}
