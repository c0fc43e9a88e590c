use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

/// 处理用户登出
/// 用过期的空 Cookie 覆盖会话，未登录时同样返回成功
pub async fn handle_logout() -> ActixResult<HttpResponse> {
    let mut response = HttpResponse::Ok();
    for cookie in JwtUtils::create_empty_cookies() {
        response.cookie(cookie);
    }

    Ok(response.json(ApiResponse::<()>::success_empty("Logged out.")))
}
