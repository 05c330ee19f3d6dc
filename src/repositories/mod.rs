//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 `Arc<dyn UserStore>`로 저장소를 주입받습니다.
//! 어떤 구현을 사용할지는 `STORAGE_BACKEND` 환경 변수로 결정됩니다.

pub mod users;
