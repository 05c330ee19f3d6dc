//! SendGrid v3 API 메일 발송기

use async_trait::async_trait;
use serde_json::json;
use crate::errors::AppError;
use super::mailer::{MailMessage, MailReceipt, Mailer};

pub struct SendGridMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl SendGridMailer {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// `POST /v3/mail/send` 요청 바디
    fn payload(message: &MailMessage) -> serde_json::Value {
        json!({
            "personalizations": [{ "to": [{ "email": message.to }] }],
            "from": { "email": message.from },
            "subject": message.subject,
            "content": [{ "type": "text/html", "value": message.html }],
        })
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, message: &MailMessage) -> Result<MailReceipt, AppError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&Self::payload(message))
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("SendGrid 요청 실패: {}", e)))?;

        let status = response.status().as_u16();
        if status != MailReceipt::ACCEPTED {
            let body = response.text().await.unwrap_or_default();
            log::warn!("⚠️ SendGrid 응답 {}: {}", status, body);
        }

        Ok(MailReceipt { status })
    }
}
