// Async HTTP client for the task-board REST API.
//
// Paths are relative to the configured API base, e.g.
// `http://localhost:3000/` + `board/get-boards/1`.

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{
    ApiBoard, ApiUser, BoardUpdate, CreateBoard, CreateList, CreateTask, CreateUser, Created,
    ListUpdate, TaskUpdate,
};

/// Async client for the task-board API.
///
/// Stateless apart from the connection pool: there is no authentication,
/// every call is a plain JSON request against `base_url`.
#[derive(Debug, Clone)]
pub struct BoardClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BoardClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages headers/timeouts).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Ensure the base path ends with `/` so relative joins append to it
    /// instead of replacing the last segment.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The API base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── Users ────────────────────────────────────────────────────────

    /// `POST /user/create`
    pub async fn create_user(&self, name: &str) -> Result<ApiUser, Error> {
        self.post(
            "user/create",
            &CreateUser {
                name: name.to_owned(),
            },
        )
        .await
    }

    // ── Boards ───────────────────────────────────────────────────────

    /// `GET /board/get-boards/{userId}` -- the full nested graph.
    pub async fn get_boards(&self, user_id: u64) -> Result<Vec<ApiBoard>, Error> {
        self.get(&format!("board/get-boards/{user_id}")).await
    }

    /// `POST /board/create`
    pub async fn create_board(&self, title: &str, user_id: u64) -> Result<Created, Error> {
        self.post_created(
            "board/create",
            &CreateBoard {
                title: title.to_owned(),
                user_id,
            },
        )
        .await
    }

    /// `PUT /board/update/{boardId}`
    pub async fn update_board(&self, board_id: u64, update: &BoardUpdate) -> Result<(), Error> {
        self.put(&format!("board/update/{board_id}"), update).await
    }

    /// `DELETE /board/delete/{boardId}`
    pub async fn delete_board(&self, board_id: u64) -> Result<(), Error> {
        self.delete(&format!("board/delete/{board_id}")).await
    }

    // ── Lists ────────────────────────────────────────────────────────

    /// `POST /list/create`
    pub async fn create_list(&self, title: &str, board_id: u64) -> Result<Created, Error> {
        self.post_created(
            "list/create",
            &CreateList {
                title: title.to_owned(),
                board_id,
            },
        )
        .await
    }

    /// `PUT /list/update/{listId}`
    pub async fn update_list(&self, list_id: u64, update: &ListUpdate) -> Result<(), Error> {
        self.put(&format!("list/update/{list_id}"), update).await
    }

    /// `DELETE /list/delete/{listId}`
    pub async fn delete_list(&self, list_id: u64) -> Result<(), Error> {
        self.delete(&format!("list/delete/{list_id}")).await
    }

    // ── Tasks ────────────────────────────────────────────────────────

    /// `POST /task/create`
    pub async fn create_task(&self, task: &CreateTask) -> Result<Created, Error> {
        self.post_created("task/create", task).await
    }

    /// `PUT /task/update/{taskId}`
    pub async fn update_task(&self, task_id: u64, update: &TaskUpdate) -> Result<(), Error> {
        self.put(&format!("task/update/{task_id}"), update).await
    }

    /// `DELETE /task/delete/{taskId}`
    pub async fn delete_task(&self, task_id: u64) -> Result<(), Error> {
        self.delete(&format!("task/delete/{task_id}")).await
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn post_created<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Created, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_optional(resp).await
    }

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.handle_empty(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            decode(body)
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    /// Like `handle_response`, but a 2xx without a JSON body yields
    /// `T::default()`.
    async fn handle_optional<T: DeserializeOwned + Default>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if !status.is_success() {
            return Err(self.parse_error(status, resp).await);
        }

        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        let body = resp.text().await?;

        if !is_json || body.trim().is_empty() {
            return Ok(T::default());
        }
        decode(body)
    }

    /// Update/delete endpoints may answer with anything on success; the
    /// body is ignored.
    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();
        Error::Http {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_owned(),
            body: if raw.trim().is_empty() {
                "Request failed".into()
            } else {
                raw
            },
        }
    }
}

fn decode<T: DeserializeOwned>(body: String) -> Result<T, Error> {
    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}
