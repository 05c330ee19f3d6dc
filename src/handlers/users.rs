//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 엔드포인트는 `AuthMiddleware`가 적용된 스코프 아래에 등록되며,
//! 핸들러는 [`AuthenticatedUser`] extractor로 요청자 정보를 받습니다.
//!
//! | 메서드 | 경로 | 설명 | 권한 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `GET` | `/users` | 사용자 목록 | Admin | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | Admin 또는 본인 | 200 OK |
//! | `PUT` | `/users/{id}` | 사용자 정보 수정 | Admin 또는 본인 | 204 No Content |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | Admin 또는 본인 | 204 No Content |

use actix_web::{delete, get, put, web, HttpResponse};
use crate::core::AppContext;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{UpdateUserRequest, UserResponse, ValidateRequest};
use crate::errors::{AppError, ErrorResponse};
use crate::services::users::parse_user_id;

/// 사용자 목록 조회 핸들러 (Admin 전용)
///
/// # Endpoint
/// `GET /users`
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "전체 사용자", body = Vec<UserResponse>),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 403, description = "Admin 아님", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
#[get("")]
pub async fn list_users(
    context: web::Data<AppContext>,
    actor: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let users = context.user_service.list_users(&actor).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 조회 핸들러
///
/// # Endpoint
/// `GET /users/{id}`
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "사용자 ObjectId (24자리 hex)")),
    responses(
        (status = 200, description = "사용자 정보", body = UserResponse),
        (status = 400, description = "잘못된 id", body = ErrorResponse),
        (status = 403, description = "다른 사용자의 리소스", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
#[get("/{id}")]
pub async fn get_user(
    context: web::Data<AppContext>,
    actor: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = context.user_service.get_user(&actor, &path).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 정보 수정 핸들러
///
/// id 형식을 먼저 확인한 뒤 바디를 검증합니다.
///
/// # Endpoint
/// `PUT /users/{id}`
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "사용자 ObjectId (24자리 hex)")),
    request_body = UpdateUserRequest,
    responses(
        (status = 204, description = "수정 완료"),
        (status = 400, description = "잘못된 id 또는 바디", body = ErrorResponse),
        (status = 403, description = "다른 사용자의 리소스", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "다른 사용자와 중복", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
#[put("/{id}")]
pub async fn update_user(
    context: web::Data<AppContext>,
    actor: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    parse_user_id(&path)?;
    payload.validate_request("body")?;

    context
        .user_service
        .update_user(&actor, &path, payload.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 삭제 핸들러
///
/// # Endpoint
/// `DELETE /users/{id}`
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "사용자 ObjectId (24자리 hex)")),
    responses(
        (status = 204, description = "삭제 완료"),
        (status = 403, description = "다른 사용자의 리소스", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
#[delete("/{id}")]
pub async fn delete_user(
    context: web::Data<AppContext>,
    actor: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    context.user_service.delete_user(&actor, &path).await?;
    Ok(HttpResponse::NoContent().finish())
}
