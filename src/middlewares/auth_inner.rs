use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use chrono::Utc;
use futures_util::future::LocalBoxFuture;
use crate::core::ServiceRegistry;
use crate::domain::models::auth::AuthenticatedAccount;
use crate::errors::AppError;
use crate::services::auth::{extract_bearer_token, TokenIssuer};

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
            let auth_result = match req.app_data::<web::Data<ServiceRegistry>>() {
                Some(registry) => authenticate(&req, registry.token_issuer.as_ref()),
                None => Err(AppError::InternalError(
                    "ServiceRegistry가 등록되지 않았습니다".to_string(),
                )),
            };

            match auth_result {
                Ok(account) => {
                    log::debug!("인증 성공: 계정 ID {}", account.account_id);
                    req.extensions_mut().insert(account);
                }
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn authenticate(
    req: &ServiceRequest,
    token_issuer: &dyn TokenIssuer,
) -> Result<AuthenticatedAccount, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = extract_bearer_token(auth_header)?;
    let claims = token_issuer.verify_token(token, Utc::now())?;

    Ok(AuthenticatedAccount::from(claims))
}
