//! HTTP client for the bot platform API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::transport::BotSender;
use crate::{DataShareError, Result};

/// Response envelope used by every bot API method.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

impl<T> ApiResponse<T> {
    fn into_result(self, method: &str) -> Result<Option<T>> {
        if self.ok {
            Ok(self.result)
        } else {
            let reason = self
                .description
                .unwrap_or_else(|| "no description".to_string());
            Err(DataShareError::BotApi(format!("{method}: {reason}")))
        }
    }
}

/// File metadata returned by `getFile`.
#[derive(Debug, Deserialize)]
struct FileInfo {
    #[serde(default)]
    file_path: Option<String>,
}

/// Bot platform API client.
#[derive(Debug, Clone)]
pub struct BotApi {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

impl BotApi {
    /// Create a client against the given API base URL.
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            token: token.into(),
        }
    }

    /// URL of a bot API method.
    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    /// URL of a file download path.
    fn file_url(&self, file_path: &str) -> String {
        format!("{}/file/bot{}/{}", self.api_base, self.token, file_path)
    }

    /// Send a text message to a chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&serde_json::json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await?
            .json::<ApiResponse<serde_json::Value>>()
            .await?;
        response.into_result("sendMessage").map(|_| ())
    }

    /// Send a whole file to a chat as a document.
    pub async fn send_document(
        &self,
        chat_id: i64,
        data: &[u8],
        name: &str,
        mime: &str,
    ) -> Result<()> {
        let part = reqwest::multipart::Part::bytes(data.to_vec())
            .file_name(name.to_string())
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .part("document", part);

        let response = self
            .client
            .post(self.method_url("sendDocument"))
            .multipart(form)
            .send()
            .await?
            .json::<ApiResponse<serde_json::Value>>()
            .await?;
        response.into_result("sendDocument").map(|_| ())
    }

    /// Resolve a file id to its download path.
    pub async fn get_file_path(&self, file_id: &str) -> Result<String> {
        let response = self
            .client
            .post(self.method_url("getFile"))
            .json(&serde_json::json!({ "file_id": file_id }))
            .send()
            .await?
            .json::<ApiResponse<FileInfo>>()
            .await?;
        response
            .into_result("getFile")?
            .and_then(|info| info.file_path)
            .ok_or_else(|| DataShareError::BotApi("getFile: no file_path in result".to_string()))
    }

    /// Download a file's bytes by its download path.
    pub async fn download_file(&self, file_path: &str) -> Result<Vec<u8>> {
        let response = self.client.get(self.file_url(file_path)).send().await?;
        if !response.status().is_success() {
            return Err(DataShareError::BotApi(format!(
                "file download failed with status {}",
                response.status()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Fetch an uploaded file's bytes by its file id.
    pub async fn fetch_file(&self, file_id: &str) -> Result<Vec<u8>> {
        let path = self.get_file_path(file_id).await?;
        self.download_file(&path).await
    }

    /// Register the webhook URL with the platform.
    pub async fn set_webhook(&self, url: &str) -> Result<()> {
        let response = self
            .client
            .post(self.method_url("setWebhook"))
            .json(&serde_json::json!({ "url": url }))
            .send()
            .await?
            .json::<ApiResponse<bool>>()
            .await?;
        response.into_result("setWebhook").map(|_| ())
    }

    /// Remove the registered webhook.
    pub async fn delete_webhook(&self) -> Result<()> {
        let response = self
            .client
            .post(self.method_url("deleteWebhook"))
            .json(&serde_json::json!({}))
            .send()
            .await?
            .json::<ApiResponse<bool>>()
            .await?;
        response.into_result("deleteWebhook").map(|_| ())
    }
}

#[async_trait]
impl BotSender for BotApi {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        self.send_message(chat_id, text).await
    }

    async fn send_file(&self, chat_id: i64, data: &[u8], name: &str, mime: &str) -> Result<()> {
        self.send_document(chat_id, data, name, mime).await
    }
}
