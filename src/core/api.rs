//! Client for the local file service.
//!
//! [`ExplorerApi`] is the seam between the explorer state and the network:
//! [`HttpApi`] talks to the backend through the browser Fetch API, tests
//! substitute an in-memory implementation.
//!
//! Every response body goes through the same decoding rules: a JSON object
//! carrying an `error` field is an application error regardless of HTTP
//! status, anything else that does not match the expected shape is a data
//! shape error.

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{FALLBACK_DRIVE, endpoints};
use crate::core::error::{ApiError, FetchError};
use crate::core::query::QueryContext;
use crate::models::{Category, DirectoryEntry, FolderNode};
use crate::utils::{self, url};

/// Operations offered by the file service.
#[allow(async_fn_in_trait)]
pub trait ExplorerApi {
    /// Drive roots to offer in the sidebar.
    async fn drives(&self) -> Result<Vec<String>, ApiError>;

    async fn list_directory(&self, path: &str) -> Result<Vec<DirectoryEntry>, ApiError>;

    async fn list_category(
        &self,
        category: Category,
        base_path: &str,
    ) -> Result<Vec<DirectoryEntry>, ApiError>;

    async fn search(&self, query: &str, base_path: &str) -> Result<Vec<DirectoryEntry>, ApiError>;

    /// Ask the host to open a file with its default application.
    async fn open(&self, path: &str) -> Result<(), ApiError>;

    /// Move files into category folders; returns how many were moved.
    async fn organize(&self, files: &[String]) -> Result<usize, ApiError>;

    async fn folder_tree(&self, path: &str) -> Result<FolderNode, ApiError>;
}

/// Fetch the entries a query context represents.
pub async fn fetch_listing<A: ExplorerApi>(
    api: &A,
    target: &QueryContext,
) -> Result<Vec<DirectoryEntry>, ApiError> {
    let result = match target {
        QueryContext::Idle => Ok(Vec::new()),
        QueryContext::DirectoryListing { path } => api.list_directory(path).await,
        QueryContext::CategoryFilter {
            category,
            base_path,
        } => api.list_category(*category, base_path).await,
        QueryContext::SearchResults { query, base_path } => api.search(query, base_path).await,
    };
    if let Err(err) = &result {
        warn!("listing {:?} failed: {}", target, err);
    }
    result
}

/// Drive list to display, never empty.
pub async fn resolve_drives<A: ExplorerApi>(api: &A) -> Vec<String> {
    match api.drives().await {
        Ok(drives) if !drives.is_empty() => drives,
        Ok(_) => {
            warn!("no drives reported, using {}", FALLBACK_DRIVE);
            vec![FALLBACK_DRIVE.to_string()]
        }
        Err(err) => {
            warn!("drive lookup failed ({}), using {}", err, FALLBACK_DRIVE);
            vec![FALLBACK_DRIVE.to_string()]
        }
    }
}

// =============================================================================
// HTTP implementation
// =============================================================================

/// [`ExplorerApi`] over HTTP against the configured base URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[derive(Serialize)]
struct OpenBody<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct OrganizeBody<'a> {
    files: &'a [String],
}

impl ExplorerApi for HttpApi {
    async fn drives(&self) -> Result<Vec<String>, ApiError> {
        let response = utils::get_text(&url::api_url(endpoints::DRIVES)).await;
        decode(response)
    }

    async fn list_directory(&self, path: &str) -> Result<Vec<DirectoryEntry>, ApiError> {
        decode_entries(utils::get_text(&url::files_url(path)).await)
    }

    async fn list_category(
        &self,
        category: Category,
        base_path: &str,
    ) -> Result<Vec<DirectoryEntry>, ApiError> {
        decode_entries(utils::get_text(&url::category_url(category, base_path)).await)
    }

    async fn search(&self, query: &str, base_path: &str) -> Result<Vec<DirectoryEntry>, ApiError> {
        decode_entries(utils::get_text(&url::search_url(query, base_path)).await)
    }

    async fn open(&self, path: &str) -> Result<(), ApiError> {
        let response =
            utils::post_json(&url::api_url(endpoints::OPEN), &OpenBody { path }).await;
        parse_ack(&response_body(response)?).map(|_| ())
    }

    async fn organize(&self, files: &[String]) -> Result<usize, ApiError> {
        let response =
            utils::post_json(&url::api_url(endpoints::ORGANIZE), &OrganizeBody { files }).await;
        let ack = parse_ack(&response_body(response)?)?;
        Ok(organized_count(&ack, files.len()))
    }

    async fn folder_tree(&self, path: &str) -> Result<FolderNode, ApiError> {
        decode(utils::get_text(&url::folder_tree_url(path)).await)
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Body text of a response, or the reason there is none worth decoding.
///
/// A non-2xx response whose body names an error is reported as that error.
fn response_body(response: Result<String, FetchError>) -> Result<String, ApiError> {
    match response {
        Ok(body) => Ok(body),
        Err(FetchError::HttpStatus { status, body }) => match application_error(&body) {
            Some(message) => Err(ApiError::ApplicationError(message)),
            None => Err(ApiError::NetworkFailure(FetchError::HttpError(status))),
        },
        Err(err) => Err(err.into()),
    }
}

fn decode<T: DeserializeOwned>(response: Result<String, FetchError>) -> Result<T, ApiError> {
    let body = response_body(response)?;
    let value = parse_json(&body)?;
    if let Some(message) = error_field(&value) {
        return Err(ApiError::ApplicationError(message));
    }
    serde_json::from_value(value).map_err(|e| ApiError::DataShapeError(e.to_string()))
}

fn decode_entries(response: Result<String, FetchError>) -> Result<Vec<DirectoryEntry>, ApiError> {
    parse_entries(&response_body(response)?)
}

fn parse_json(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DataShapeError(e.to_string()))
}

fn error_field(value: &Value) -> Option<String> {
    value
        .as_object()?
        .get("error")
        .map(|e| e.as_str().map_or_else(|| e.to_string(), str::to_string))
}

fn application_error(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| error_field(&v))
}

/// Decode a list response.
///
/// An object with `error` is an application error; anything other than an
/// array of entries is a data shape error.
pub fn parse_entries(body: &str) -> Result<Vec<DirectoryEntry>, ApiError> {
    let value = parse_json(body)?;
    if let Some(message) = error_field(&value) {
        return Err(ApiError::ApplicationError(message));
    }
    if !value.is_array() {
        return Err(ApiError::DataShapeError(
            "expected a list of entries".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| ApiError::DataShapeError(e.to_string()))
}

/// Decode an acknowledgement such as `{"success": true}`.
pub fn parse_ack(body: &str) -> Result<Value, ApiError> {
    let value = parse_json(body)?;
    if let Some(message) = error_field(&value) {
        return Err(ApiError::ApplicationError(message));
    }
    let Some(object) = value.as_object() else {
        return Err(ApiError::DataShapeError(
            "expected an acknowledgement object".to_string(),
        ));
    };
    if object.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::ApplicationError("Operation failed".to_string()));
    }
    Ok(value)
}

/// Number of files reported as moved by an organize acknowledgement.
///
/// Per-file problems are logged; a report without an `organized` list counts
/// every requested file.
fn organized_count(ack: &Value, requested: usize) -> usize {
    if let Some(errors) = ack.get("errors").and_then(Value::as_array) {
        for error in errors {
            warn!("organize: {}", error);
        }
    }
    ack.get("organized")
        .and_then(Value::as_array)
        .map_or(requested, Vec::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockApi {
        drives: Option<Vec<String>>,
        listing: Vec<DirectoryEntry>,
        calls: RefCell<Vec<String>>,
    }

    impl ExplorerApi for MockApi {
        async fn drives(&self) -> Result<Vec<String>, ApiError> {
            self.drives
                .clone()
                .ok_or(ApiError::NetworkFailure(FetchError::Timeout))
        }

        async fn list_directory(&self, path: &str) -> Result<Vec<DirectoryEntry>, ApiError> {
            self.calls.borrow_mut().push(format!("dir {}", path));
            if path == "Z:" {
                return Err(ApiError::ApplicationError("Directory not found".into()));
            }
            Ok(self.listing.clone())
        }

        async fn list_category(
            &self,
            category: Category,
            base_path: &str,
        ) -> Result<Vec<DirectoryEntry>, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("category {} {}", category.as_str(), base_path));
            Ok(self.listing.clone())
        }

        async fn search(
            &self,
            query: &str,
            base_path: &str,
        ) -> Result<Vec<DirectoryEntry>, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("search {} {}", query, base_path));
            Ok(Vec::new())
        }

        async fn open(&self, _path: &str) -> Result<(), ApiError> {
            Ok(())
        }

        async fn organize(&self, files: &[String]) -> Result<usize, ApiError> {
            Ok(files.len())
        }

        async fn folder_tree(&self, path: &str) -> Result<FolderNode, ApiError> {
            Ok(FolderNode::leaf(path, path))
        }
    }

    #[test]
    fn test_parse_entries() {
        let body = r#"[
            {"name":"docs","path":"C:\\docs","type":"directory","size":0,"modified":1700000000.5},
            {"name":"a.txt","path":"C:\\a.txt","type":"file","size":12,"modified":1700000001.0}
        ]"#;
        let entries = parse_entries(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_dir());
        assert_eq!(entries[1].size, Some(12));
    }

    #[test]
    fn test_parse_entries_error_object() {
        assert_eq!(
            parse_entries(r#"{"error":"Path parameter is required"}"#),
            Err(ApiError::ApplicationError(
                "Path parameter is required".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_entries_bad_shape() {
        assert!(matches!(
            parse_entries(r#"{"items":[]}"#),
            Err(ApiError::DataShapeError(_))
        ));
        assert!(matches!(
            parse_entries("<html>"),
            Err(ApiError::DataShapeError(_))
        ));
    }

    #[test]
    fn test_parse_ack() {
        assert!(parse_ack(r#"{"success":true}"#).is_ok());
        assert_eq!(
            parse_ack(r#"{"error":"File not found"}"#),
            Err(ApiError::ApplicationError("File not found".to_string()))
        );
        assert!(parse_ack(r#"{"success":false}"#).is_err());
        assert!(matches!(parse_ack("[]"), Err(ApiError::DataShapeError(_))));
    }

    #[test]
    fn test_error_status_with_error_body() {
        let response = Err(FetchError::HttpStatus {
            status: 404,
            body: r#"{"error":"File not found"}"#.to_string(),
        });
        assert_eq!(
            response_body(response),
            Err(ApiError::ApplicationError("File not found".to_string()))
        );

        let response = Err(FetchError::HttpStatus {
            status: 502,
            body: "Bad Gateway".to_string(),
        });
        assert_eq!(
            response_body(response),
            Err(ApiError::NetworkFailure(FetchError::HttpError(502)))
        );
    }

    #[test]
    fn test_organized_count() {
        let ack = parse_ack(
            r#"{"success":true,"organized":[{"file":"a.txt"}],"errors":["File not found: b"]}"#,
        )
        .unwrap();
        assert_eq!(organized_count(&ack, 2), 1);
        let ack = parse_ack(r#"{"success":true}"#).unwrap();
        assert_eq!(organized_count(&ack, 3), 3);
    }

    #[tokio::test]
    async fn test_fetch_listing_routes_by_context() {
        let api = MockApi::default();
        fetch_listing(
            &api,
            &QueryContext::DirectoryListing {
                path: "C:".to_string(),
            },
        )
        .await
        .unwrap();
        fetch_listing(
            &api,
            &QueryContext::CategoryFilter {
                category: Category::Image,
                base_path: "C:".to_string(),
            },
        )
        .await
        .unwrap();
        fetch_listing(
            &api,
            &QueryContext::SearchResults {
                query: "cat".to_string(),
                base_path: "D:".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(fetch_listing(&api, &QueryContext::Idle).await.unwrap().is_empty());

        assert_eq!(
            *api.calls.borrow(),
            vec!["dir C:", "category image C:", "search cat D:"]
        );
    }

    #[tokio::test]
    async fn test_fetch_listing_propagates_errors() {
        let api = MockApi::default();
        let result = fetch_listing(
            &api,
            &QueryContext::DirectoryListing {
                path: "Z:".to_string(),
            },
        )
        .await;
        assert_eq!(
            result,
            Err(ApiError::ApplicationError("Directory not found".into()))
        );
    }

    #[tokio::test]
    async fn test_resolve_drives_falls_back() {
        let failing = MockApi::default();
        assert_eq!(resolve_drives(&failing).await, vec!["C:".to_string()]);

        let empty = MockApi {
            drives: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(resolve_drives(&empty).await, vec!["C:".to_string()]);

        let ok = MockApi {
            drives: Some(vec!["C:".to_string(), "D:".to_string()]),
            ..Default::default()
        };
        assert_eq!(resolve_drives(&ok).await, vec!["C:", "D:"]);
    }
}
