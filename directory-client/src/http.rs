//! HTTP client for the directory API

use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{DeleteAck, Employee, EmployeeInput, LoginRequest, LoginResponse, LoginUser};
use shared::search::filter_employees;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for the employee directory server
///
/// The logged-in flag is purely local: the server issues nothing on login
/// and the employee endpoints do not check it.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
    config: ClientConfig,
    user: Option<LoginUser>,
}

impl DirectoryClient {
    /// Create a new client from configuration
    ///
    /// No request timeout is set.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            user: None,
        })
    }

    pub fn with_base_url(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::new(ClientConfig::new(base_url))
    }

    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.url(path);
        tracing::debug!(%method, %url, "Sending request");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Map an error status to [`ClientError::Server`] carrying the `error` text
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<shared::ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                });
            tracing::warn!(status = status.as_u16(), error = %message, "Server returned an error");
            return Err(ClientError::Server { status, message });
        }

        serde_json::from_str(&text).map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Check credentials and, on success, mark this client as logged in
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let response: LoginResponse = self
            .request(Method::POST, "login", Some(&LoginRequest::new(username, password)))
            .await?;

        if !response.success {
            return Err(ClientError::Server {
                status: reqwest::StatusCode::OK,
                message: response.error.unwrap_or_else(|| "Login failed".to_string()),
            });
        }

        self.user = Some(
            response
                .user
                .clone()
                .unwrap_or_else(|| LoginUser { username: username.to_string() }),
        );
        tracing::info!(username, "Logged in");
        Ok(response)
    }

    /// Forget the logged-in user; nothing is sent to the server
    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn current_user(&self) -> Option<&LoginUser> {
        self.user.as_ref()
    }

    // ========== Employees API ==========

    pub async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.request::<_, ()>(Method::GET, "employees", None).await
    }

    pub async fn create_employee(&self, input: &EmployeeInput) -> ClientResult<Employee> {
        self.request(Method::POST, "employees", Some(input)).await
    }

    pub async fn update_employee(&self, id: i64, input: &EmployeeInput) -> ClientResult<Employee> {
        self.request(Method::PUT, &format!("employees/{id}"), Some(input))
            .await
    }

    pub async fn delete_employee(&self, id: i64) -> ClientResult<DeleteAck> {
        self.request::<_, ()>(Method::DELETE, &format!("employees/{id}"), None)
            .await
    }

    /// Fetch the full list and filter it locally
    pub async fn search(&self, query: &str) -> ClientResult<Vec<Employee>> {
        let all = self.list_employees().await?;
        Ok(filter_employees(&all, query).into_iter().cloned().collect())
    }
}
