use anyhow::anyhow;
use axum::extract::{MatchedPath, RawPathParams, Request};
use axum::http::header::AsHeaderName;
use axum::http::{HeaderMap, Method, Uri};
use axum_extra::extract::Query;
use coursebook_core::AppError;
use coursebook_data::Directory;
use serde::de::DeserializeOwned;

use crate::state::AppState;

/// Everything a handler may look at for one request.
///
/// Built by the router bridge before the interceptor chain runs and passed by
/// value down the chain. Interceptors that want to alter it hand a modified
/// copy to the next handler.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub state: AppState,
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    /// Route template, e.g. `/api/v1/users/{id}`.
    pub matched_path: String,
    pub path_params: Vec<(String, String)>,
    pub request_id: String,
}

impl RequestContext {
    /// `params` is `None` when the path parameters could not be decoded; the
    /// context then carries none and [`path_id`](Self::path_id) fails with 400.
    pub fn new(state: AppState, request: Request, params: Option<&RawPathParams>) -> Self {
        let (parts, _body) = request.into_parts();

        let matched_path = parts
            .extensions
            .get::<MatchedPath>()
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        Self {
            state,
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            matched_path,
            path_params: params
                .map(|params| {
                    params
                        .iter()
                        .map(|(key, value)| (key.to_string(), value.to_string()))
                        .collect()
                })
                .unwrap_or_default(),
            request_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.state.directory
    }

    /// Header value as UTF-8; non-UTF-8 values read as absent.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Integer path parameter.
    ///
    /// # Errors
    ///
    /// 400 `invalid path param` when missing or not an integer.
    pub fn path_id(&self, name: &str) -> Result<i64, AppError> {
        self.path_param(name)
            .and_then(|value| value.parse().ok())
            .ok_or_else(|| AppError::bad_request(anyhow!("invalid path param")))
    }

    /// Deserializes the query string. Repeated keys collect into `Vec` fields.
    ///
    /// # Errors
    ///
    /// 400 `incorrect usage of query param` when binding fails.
    pub fn query<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Query::<T>::try_from_uri(&self.uri)
            .map(|Query(params)| params)
            .map_err(|_| AppError::bad_request(anyhow!("incorrect usage of query param")))
    }
}
