//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::core::AppContext;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let auth_result = match req.app_data::<web::Data<AppContext>>() {
                Some(context) => authenticate(&req, &context.tokens),
                None => Err(AppError::InternalError(
                    "AppContext가 등록되지 않았습니다".to_string(),
                )),
            };

            match auth_result {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 `Authorization` 헤더에서 액세스 토큰을 꺼내 검증
fn authenticate(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedUser, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .ok_or_else(|| {
            AppError::AuthenticationError("No Authorization was found in request.headers".to_string())
        })?
        .to_str()
        .map_err(|_| {
            AppError::AuthenticationError(crate::services::auth::BEARER_FORMAT_MESSAGE.to_string())
        })?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_access(token)?;

    Ok(AuthenticatedUser::from(claims))
}
