//! REST API helpers for the external forms backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against
//! `/api/v1/forms...`. Server-side (SSR): stubs returning errors, since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The backend reports failures as `{ "error": message }`; that message is
//! surfaced to callers unchanged so the UI can show it verbatim. Callers get
//! `Result` outputs instead of panics so backend failures degrade UI
//! behavior without crashing hydration.

#![allow(clippy::unused_async)]

use grid::document::{FormId, FormSnapshot};
use grid::repo::{FormRepository, RepoError};

use crate::state::forms::FormListItem;

/// One row of the backend's forms table, as returned by GET endpoints.
/// Only the fields the client consumes are modeled.
#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct FormRow {
    id: String,
    name: String,
    #[serde(default)]
    json: grid::matrix::FormMatrix,
}

/// Fetch the list of forms visible to the current user.
///
/// # Errors
///
/// Returns the backend's error message if the request fails.
pub async fn fetch_forms() -> Result<Vec<FormListItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/v1/forms")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        let rows: Vec<FormRow> = resp.json().await.map_err(|e| e.to_string())?;
        Ok(rows
            .into_iter()
            .map(|row| FormListItem { id: row.id, name: row.name })
            .collect())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a new form and return its backend-issued id.
///
/// # Errors
///
/// Returns the backend's error message if no id could be issued.
pub async fn create_form(name: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/v1/forms")
            .json(&serde_json::json!({ "name": name }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateResponse {
            form_id: String,
        }
        let body: CreateResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.form_id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}

/// Delete a form.
///
/// # Errors
///
/// Returns the backend's error message if the delete fails.
pub async fn delete_form(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete("/api/v1/forms")
            .json(&serde_json::json!({ "formId": id }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Extract the backend's `{ "error": message }` body, falling back to the
/// HTTP status when the body is not in that shape.
#[cfg(feature = "hydrate")]
async fn error_message(resp: gloo_net::http::Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("request failed with status {status}"),
    }
}

/// [`FormRepository`] implementation over the backend's REST API.
///
/// Injected into the editor flows (`grid::editor::load_form` and
/// `FormEditor::save`) so the engine itself never knows about HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpFormRepository;

impl FormRepository for HttpFormRepository {
    async fn load(&self, id: FormId) -> Result<FormSnapshot, RepoError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("/api/v1/forms/{id}");
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| RepoError::Backend(e.to_string()))?;
            if resp.status() == 404 {
                return Err(RepoError::NotFound(id));
            }
            if !resp.ok() {
                return Err(RepoError::Backend(error_message(resp).await));
            }
            let row: FormRow = resp
                .json()
                .await
                .map_err(|e| RepoError::Backend(e.to_string()))?;
            Ok(FormSnapshot { name: row.name, json: row.json })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(RepoError::Backend("not available on server".to_owned()))
        }
    }

    async fn save(&self, id: FormId, snapshot: &FormSnapshot) -> Result<(), RepoError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("/api/v1/forms/{id}");
            let resp = gloo_net::http::Request::put(&url)
                .json(snapshot)
                .map_err(|e| RepoError::Backend(e.to_string()))?
                .send()
                .await
                .map_err(|e| RepoError::Backend(e.to_string()))?;
            if !resp.ok() {
                return Err(RepoError::Backend(error_message(resp).await));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, snapshot);
            Err(RepoError::Backend("not available on server".to_owned()))
        }
    }

    async fn create(&self, name: &str) -> Result<FormId, RepoError> {
        #[cfg(feature = "hydrate")]
        {
            let raw = create_form(name).await.map_err(RepoError::Backend)?;
            raw.parse::<FormId>()
                .map_err(|e| RepoError::Backend(format!("malformed form id {raw:?}: {e}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            Err(RepoError::Backend("not available on server".to_owned()))
        }
    }
}
