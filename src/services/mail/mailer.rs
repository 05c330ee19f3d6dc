//! 메일 발송 인터페이스

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::errors::AppError;

/// 발송할 메일
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// 메일 제공자 응답
///
/// 제공자가 요청을 접수하면 `202 Accepted`를 돌려줍니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailReceipt {
    pub status: u16,
}

impl MailReceipt {
    pub const ACCEPTED: u16 = 202;

    pub fn is_accepted(&self) -> bool {
        self.status == Self::ACCEPTED
    }
}

/// 메일 발송기
///
/// 네트워크 오류처럼 제공자에게 도달하지 못한 경우에만 `Err`를 반환합니다.
/// 제공자가 거절한 경우는 `MailReceipt::status`로 확인합니다.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<MailReceipt, AppError>;
}
