//! Customer sign-in, registration and password reset.
//!
//! Credentials are never checked against a password store: any well-formed
//! login signs in the catalog customer with that email, falling back to the
//! demo customer.

use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use iptv_catalog::CatalogError;
use iptv_types::UserId;
use tracing::{info, warn};

use super::set_cookie;
use crate::{
    config::MockOp,
    forms::{FieldErrors, ForgotPasswordForm, LoginForm, RegisterForm},
    notice::{Notice, Toast, redirect_with},
    page::PageContext,
    session::{AUTH_COOKIE, CustomerIdentity, clear_cookie, cookie, session_cookie},
    state::AppState,
    templates::{ForgotPasswordTemplate, LoginTemplate, RegisterTemplate},
};

/// Customer shown when the login email matches no account.
const DEMO_CUSTOMER: &str = "1";

pub async fn login(ctx: PageContext) -> impl IntoResponse {
    LoginTemplate {
        page: ctx.chrome("Login - IPTV Pro"),
        form: LoginForm::default(),
        errors: FieldErrors::default(),
    }
}

/// Handler for the login form.
pub async fn sign_in(
    State(state): State<AppState>,
    ctx: PageContext,
    Form(form): Form<LoginForm>,
) -> Response {
    if let Err(errors) = form.validate() {
        return LoginTemplate { page: ctx.chrome("Login - IPTV Pro"), form, errors }.into_response();
    }

    state.simulate(MockOp::Auth).await;

    let email = form.email.trim().to_string();
    let signed_in = {
        let mut catalog = state.catalog_mut().await;
        let user_id = catalog
            .find_user_by_email(&email)
            .map_or_else(|| UserId::new(DEMO_CUSTOMER), |user| user.id.clone());
        catalog.touch_login(&user_id, Utc::now().date_naive()).map(|()| user_id)
    };

    let user_id = match signed_in {
        Ok(user_id) => user_id,
        Err(e) => {
            warn!(error = %e, "login failed");
            return LoginTemplate {
                page: ctx.chrome_with("Login - IPTV Pro", Toast::error("Login failed. Please try again.")),
                form,
                errors: FieldErrors::default(),
            }
            .into_response();
        }
    };

    info!(user = %user_id, "customer signed in");
    let token = state
        .sessions()
        .write()
        .await
        .sign_in_customer(CustomerIdentity { user_id, email });

    (
        set_cookie(session_cookie(AUTH_COOKIE, &token)),
        redirect_with("/dashboard", Notice::LoggedIn),
    )
        .into_response()
}

pub async fn register(ctx: PageContext) -> impl IntoResponse {
    RegisterTemplate {
        page: ctx.chrome("Create Account - IPTV Pro"),
        form: RegisterForm::default(),
        errors: FieldErrors::default(),
    }
}

/// Handler for the registration form.
pub async fn sign_up(
    State(state): State<AppState>,
    ctx: PageContext,
    Form(form): Form<RegisterForm>,
) -> Response {
    if let Err(errors) = form.validate() {
        return RegisterTemplate { page: ctx.chrome("Create Account - IPTV Pro"), form, errors }
            .into_response();
    }

    state.simulate(MockOp::Auth).await;

    let email = form.email.trim().to_string();
    let registered = state
        .catalog_mut()
        .await
        .register_user(form.name.trim(), email.clone(), Utc::now().date_naive());

    let user_id = match registered {
        Ok(user_id) => user_id,
        Err(CatalogError::EmailTaken(_)) => {
            let mut errors = FieldErrors::default();
            errors.add("email", "An account with this email already exists");
            return RegisterTemplate { page: ctx.chrome("Create Account - IPTV Pro"), form, errors }
                .into_response();
        }
        Err(e) => {
            warn!(error = %e, "registration failed");
            return RegisterTemplate {
                page: ctx.chrome_with(
                    "Create Account - IPTV Pro",
                    Toast::error("Registration failed. Please try again."),
                ),
                form,
                errors: FieldErrors::default(),
            }
            .into_response();
        }
    };

    let token = state
        .sessions()
        .write()
        .await
        .sign_in_customer(CustomerIdentity { user_id, email });

    (
        set_cookie(session_cookie(AUTH_COOKIE, &token)),
        redirect_with("/dashboard", Notice::Registered),
    )
        .into_response()
}

pub async fn forgot_password(ctx: PageContext) -> impl IntoResponse {
    ForgotPasswordTemplate {
        page: ctx.chrome("Reset Password - IPTV Pro"),
        form: ForgotPasswordForm::default(),
        errors: FieldErrors::default(),
        sent_to: None,
    }
}

/// Handler for the password reset form. Nothing is actually sent.
pub async fn send_reset(
    State(state): State<AppState>,
    ctx: PageContext,
    Form(form): Form<ForgotPasswordForm>,
) -> impl IntoResponse {
    if let Err(errors) = form.validate() {
        return ForgotPasswordTemplate {
            page: ctx.chrome("Reset Password - IPTV Pro"),
            form,
            errors,
            sent_to: None,
        };
    }

    state.simulate(MockOp::Contact).await;

    ForgotPasswordTemplate {
        page: ctx.chrome_with(
            "Reset Password - IPTV Pro",
            Toast::success("Password reset instructions sent to your email!"),
        ),
        sent_to: Some(form.email.trim().to_string()),
        form,
        errors: FieldErrors::default(),
    }
}

/// Ends the customer session.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = cookie(&headers, AUTH_COOKIE) {
        state.sessions().write().await.sign_out(&token);
    }
    (set_cookie(clear_cookie(AUTH_COOKIE)), redirect_with("/", Notice::LoggedOut))
}
