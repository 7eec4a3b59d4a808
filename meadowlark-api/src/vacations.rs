use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;

use meadowlark_core::booking::{self, PurchaseOutcome};
use meadowlark_core::catalog::VacationPackage;
use meadowlark_core::currency::convert_from_usd;
use meadowlark_core::repository::StoreError;
use meadowlark_core::signup::{self, SignupError};

use crate::error::AppError;
use crate::flash::{self, Flash};
use crate::state::AppState;
use crate::views;
use crate::wants_json;

const CURRENCY_KEY: &str = "currency";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/vacations", get(list_vacations).post(purchase_vacation))
        .route("/vacation/{slug}", get(vacation_detail))
        .route("/set-currency/{code}", get(set_currency))
        .route(
            "/notify-me-when-in-season",
            get(notify_form).post(notify_submit),
        )
}

async fn list_vacations(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let currency: String = session
        .get(CURRENCY_KEY)
        .await?
        .unwrap_or_else(|| "USD".to_string());

    let packages = state.catalog.find_available().await?;
    let priced: Vec<(VacationPackage, f64)> = packages
        .into_iter()
        .map(|pkg| {
            let display = convert_from_usd(pkg.price_usd(), &currency);
            (pkg, display)
        })
        .collect();

    let flash = flash::take_flash(&session).await?;
    Ok(Html(views::vacations_page(&priced, &currency, flash.as_ref())))
}

#[derive(Debug, Deserialize)]
struct PurchaseForm {
    #[serde(default)]
    purchase_sku: String,
}

async fn purchase_vacation(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PurchaseForm>,
) -> Result<Redirect, AppError> {
    let flash = match booking::purchase(state.catalog.as_ref(), &form.purchase_sku).await {
        PurchaseOutcome::Booked => {
            Flash::success("Thank you!", "Your vacation has been booked.")
        }
        PurchaseOutcome::Failed => Flash::warning(
            "Ooops!",
            "Something went wrong with your booking; please contact us.",
        ),
    };
    flash::set_flash(&session, flash).await?;
    Ok(Redirect::to("/vacations"))
}

async fn vacation_detail(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    match state.catalog.find_by_slug(&slug).await {
        Ok(pkg) => {
            let flash = flash::take_flash(&session).await?;
            Ok(Html(views::vacation_detail(&pkg, flash.as_ref())).into_response())
        }
        Err(StoreError::NotFound) => {
            Ok((StatusCode::NOT_FOUND, Html(views::not_found())).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

async fn set_currency(
    session: Session,
    Path(code): Path<String>,
) -> Result<Redirect, AppError> {
    // Stored verbatim; an unsupported code surfaces later as an unpriced
    // listing, not as an error here.
    session.insert(CURRENCY_KEY, code).await?;
    Ok(Redirect::to("/vacations"))
}

#[derive(Debug, Deserialize)]
struct NotifyQuery {
    #[serde(default)]
    sku: String,
}

async fn notify_form(Query(query): Query<NotifyQuery>) -> Html<String> {
    Html(views::notify_form(&query.sku))
}

#[derive(Debug, Deserialize)]
struct NotifyForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    sku: String,
}

async fn notify_submit(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<NotifyForm>,
) -> Result<Response, AppError> {
    let flash = match signup::subscribe_to_season(
        state.subscriptions.as_ref(),
        &form.email,
        &form.sku,
    )
    .await
    {
        Ok(()) => Flash::success(
            "Thank you!",
            "You will be notified when this vacation is in season.",
        ),
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
            tracing::error!(error = %err, "season subscription failed");
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
    Ok(Redirect::to("/vacations").into_response())
}
