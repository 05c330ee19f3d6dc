//! 로그 출력 메일 발송기
//!
//! 메일 제공자가 설정되지 않은 개발 환경과 테스트에서 사용합니다.
//! 발송한 메일은 메모리에 보관되어 나중에 확인할 수 있습니다.

use std::sync::{Mutex, PoisonError};
use async_trait::async_trait;
use crate::errors::AppError;
use super::mailer::{MailMessage, MailReceipt, Mailer};

#[derive(Debug)]
pub struct LogMailer {
    status: u16,
    outbox: Mutex<Vec<MailMessage>>,
}

impl Default for LogMailer {
    fn default() -> Self {
        Self::with_status(MailReceipt::ACCEPTED)
    }
}

impl LogMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 항상 주어진 상태 코드로 응답하는 발송기
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            outbox: Mutex::new(Vec::new()),
        }
    }

    /// 지금까지 발송한 메일
    pub fn sent(&self) -> Vec<MailMessage> {
        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> Result<MailReceipt, AppError> {
        log::info!("📧 [메일] {} -> {}: {}", message.from, message.to, message.subject);
        log::debug!("{}", message.html);

        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());

        Ok(MailReceipt { status: self.status })
    }
}
