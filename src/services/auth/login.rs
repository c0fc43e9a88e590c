use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

/// 用户名不存在和密码错误使用同一提示
const INVALID_CREDENTIALS: &str = "Invalid username or password.";

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        INVALID_CREDENTIALS,
    ))
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let username = login_request.username.trim();
    let password = login_request.password.trim();
    if username.is_empty() || password.is_empty() {
        return Ok(invalid_credentials());
    }

    // 1. 根据用户名获取用户信息
    let user = match storage.get_user_by_username(username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            info!("Login attempt for unknown user {}", username);
            return Ok(invalid_credentials());
        }
        Err(e) => {
            error!("Login lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, please try again",
                )),
            );
        }
    };

    // 2. 验证密码
    if !verify_password(password, &user.password_hash) {
        info!("Wrong password for user {}", username);
        return Ok(invalid_credentials());
    }

    // 3. 更新最后登录时间
    if let Err(e) = storage.update_last_login(user.id).await {
        warn!("Failed to update last login for {}: {}", user.id, e);
    }

    // 4. 生成令牌对
    let token_pair = match user.generate_token_pair() {
        Ok(pair) => pair,
        Err(e) => {
            error!("Failed to generate JWT token: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            );
        }
    };

    info!("User {} logged in successfully", user.username);

    let access_cookie = JwtUtils::create_access_token_cookie(&token_pair.access_token);
    let refresh_cookie = JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

    let response = LoginResponse {
        access_token: token_pair.access_token,
        expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
        user,
        created_at: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok()
        .cookie(access_cookie)
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login successful")))
}
