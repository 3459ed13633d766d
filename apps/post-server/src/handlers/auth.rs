//! Login handler.

use actix_web::{HttpResponse, web};

use postboard_core::domain::Credentials;
use postboard_shared::{ApiResponse, LoginRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let credentials = Credentials {
        email: req.email,
        password: req.password,
    };

    if let Err(e) = state.account.authenticate(&credentials) {
        tracing::warn!(email = %credentials.email, "Login failed");
        return Err(e.into());
    }

    tracing::info!(email = %credentials.email, "Login succeeded");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(credentials.email)))
}
