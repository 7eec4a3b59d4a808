use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;

use meadowlark_core::signup::{self, SignupError};

use crate::error::AppError;
use crate::flash::{self, Flash};
use crate::state::AppState;
use crate::views;
use crate::wants_json;

const USER_NAME_KEY: &str = "user_name";
const COLOR_SCHEME_KEY: &str = "color_scheme";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/newsletter", get(newsletter_form).post(newsletter_submit))
        .route("/newsletter/archive", get(newsletter_archive))
}

async fn newsletter_form(session: Session) -> Result<Html<String>, AppError> {
    session.insert(USER_NAME_KEY, "Anonymous").await?;
    let color_scheme: String = session
        .get(COLOR_SCHEME_KEY)
        .await?
        .unwrap_or_else(|| "dark".to_string());

    let flash = flash::take_flash(&session).await?;
    Ok(Html(views::newsletter_form(&color_scheme, flash.as_ref())))
}

#[derive(Debug, Deserialize)]
struct NewsletterForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

async fn newsletter_submit(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<NewsletterForm>,
) -> Result<Response, AppError> {
    let flash = match signup::newsletter_signup(
        state.newsletter.as_ref(),
        &form.name,
        &form.email,
    )
    .await
    {
        Ok(()) => {
            if wants_json(&headers) {
                return Ok(Json(json!({ "success": true })).into_response());
            }
            Flash::success(
                "Thank you!",
                "You have now been signed up for the newsletter.",
            )
        }
        Err(SignupError::InvalidEmail) => {
            if wants_json(&headers) {
                return Ok(Json(json!({ "error": "Invalid email address." })).into_response());
            }
            Flash::danger(
                "Validation error!",
                "The email address you entered was not valid.",
            )
        }
        Err(SignupError::Store(err)) => {
            tracing::error!(error = %err, "newsletter signup failed");
            if wants_json(&headers) {
                return Ok(Json(json!({ "error": "Database error." })).into_response());
            }
            Flash::danger(
                "Database error!",
                "There was a database error; please try again later.",
            )
        }
    };
    flash::set_flash(&session, flash).await?;
    Ok(Redirect::to("/newsletter/archive").into_response())
}

async fn newsletter_archive(session: Session) -> Result<Html<String>, AppError> {
    let flash = flash::take_flash(&session).await?;
    Ok(Html(views::newsletter_archive(flash.as_ref())))
}
