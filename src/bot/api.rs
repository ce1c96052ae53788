// src/bot/api.rs
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const API_BASE: &str = "https://api.telegram.org";

/// Minimal typed client for the handful of Bot API methods the bot needs.
pub struct BotApi {
    base: String,
    client: Client,
    timeout: Duration,
    max_retries: u8,
}

#[derive(Debug, Serialize)]
struct InputMediaPhoto<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    media: &'a str,
}

#[derive(Debug, Serialize)]
struct InlineKeyboardButton<'a> {
    text: &'a str,
    url: &'a str,
}

#[derive(Debug, Serialize)]
struct InlineKeyboardMarkup<'a> {
    inline_keyboard: Vec<Vec<InlineKeyboardButton<'a>>>,
}

/// Bot API envelope: `ok` plus either `result` or a `description`.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    result: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl BotApi {
    pub fn new(token: &str) -> Self {
        Self {
            base: format!("{API_BASE}/bot{token}"),
            client: Client::new(),
            timeout: Duration::from_secs(10),
            max_retries: 3,
        }
    }

    /// POST a method call, retrying transport failures with backoff.
    /// `ok = false` responses become errors carrying Telegram's description.
    async fn call<T>(&self, method: &str, payload: &Value, timeout: Duration) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base, method);

        let mut attempt: u8 = 0;
        loop {
            attempt += 1;
            let res = self
                .client
                .post(&url)
                .timeout(timeout)
                .json(payload)
                .send()
                .await;

            match res {
                Ok(rsp) => {
                    let resp: ApiResponse<T> = rsp
                        .json()
                        .await
                        .with_context(|| format!("decoding {method} response"))?;
                    if !resp.ok {
                        return Err(anyhow!(
                            "{method} failed: {}",
                            resp.description.unwrap_or_else(|| "unknown error".into())
                        ));
                    }
                    return resp
                        .result
                        .ok_or_else(|| anyhow!("{method}: ok response without result"));
                }
                Err(e) => {
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(500u64 << (attempt - 1))).await;
                        continue;
                    }
                    return Err(anyhow!("{method} request failed: {e}"));
                }
            }
        }
    }

    /// Send a list of photo URLs as a single album.
    pub async fn send_media_group(&self, chat_id: &str, photo_urls: &[String]) -> Result<()> {
        let media: Vec<InputMediaPhoto> = photo_urls
            .iter()
            .map(|u| InputMediaPhoto {
                kind: "photo",
                media: u,
            })
            .collect();
        let payload = json!({ "chat_id": chat_id, "media": media });
        let _: Value = self.call("sendMediaGroup", &payload, self.timeout).await?;
        Ok(())
    }

    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let payload = json!({ "chat_id": chat_id, "text": text });
        let _: Value = self.call("sendMessage", &payload, self.timeout).await?;
        Ok(())
    }

    /// Text message with a single URL button; link preview disabled.
    pub async fn send_message_with_button(
        &self,
        chat_id: &str,
        text: &str,
        button_text: &str,
        button_url: &str,
    ) -> Result<()> {
        let markup = InlineKeyboardMarkup {
            inline_keyboard: vec![vec![InlineKeyboardButton {
                text: button_text,
                url: button_url,
            }]],
        };
        let payload = json!({
            "chat_id": chat_id,
            "text": text,
            "reply_markup": markup,
            "disable_web_page_preview": true,
        });
        let _: Value = self.call("sendMessage", &payload, self.timeout).await?;
        Ok(())
    }

    /// Long-poll for updates past `offset`. The HTTP timeout is padded past
    /// the poll window so the server side closes the request first.
    pub async fn get_updates(&self, offset: i64, poll_secs: u64) -> Result<Vec<Update>> {
        let payload = json!({
            "offset": offset,
            "timeout": poll_secs,
            "allowed_updates": ["message"],
        });
        self.call(
            "getUpdates",
            &payload,
            Duration::from_secs(poll_secs + 10),
        )
        .await
    }
}
