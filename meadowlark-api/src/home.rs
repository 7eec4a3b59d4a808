use axum::{
    response::Html,
    routing::get,
    Router,
};
use tower_sessions::Session;

use meadowlark_core::fortune;

use crate::error::AppError;
use crate::flash;
use crate::state::AppState;
use crate::views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/thank-you", get(thank_you))
}

async fn home(session: Session) -> Result<Html<String>, AppError> {
    let flash = flash::take_flash(&session).await?;
    Ok(Html(views::home(flash.as_ref())))
}

async fn about(session: Session) -> Result<Html<String>, AppError> {
    let flash = flash::take_flash(&session).await?;
    Ok(Html(views::about(fortune::get_fortune(), flash.as_ref())))
}

async fn contact(session: Session) -> Result<Html<String>, AppError> {
    let flash = flash::take_flash(&session).await?;
    Ok(Html(views::contact(flash.as_ref())))
}

async fn thank_you() -> Html<String> {
    Html(views::thank_you())
}
