//! 메일 발송 서비스 모듈
//!
//! - [`SendGridMailer`]: `MAIL_PROVIDER=sendgrid` + `SENDGRID_API_KEY` 설정 시 사용
//! - [`LogMailer`]: 그 외 환경 (로그 출력 + 메모리 보관)

pub mod log_mailer;
pub mod mailer;
pub mod sendgrid_mailer;

pub use log_mailer::LogMailer;
pub use mailer::{MailMessage, MailReceipt, Mailer};
pub use sendgrid_mailer::SendGridMailer;
