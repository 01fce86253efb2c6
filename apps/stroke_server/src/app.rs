use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Form, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{info, warn};
use serde::Serialize;
use stroke_ai::{assess, Assessment, Predictor};
use stroke_data::{PatientForm, PatientRecord};
use stroke_model::{EncoderConfig, ModelMetadata};
use tower_http::cors::{Any, CorsLayer};

use crate::error::{ApiError, ServerError};
use crate::view::{PageView, Views};

#[derive(Debug, Clone)]
pub struct AppState {
    predictor: Predictor,
    views: Arc<Views>,
}

impl AppState {
    pub fn new(predictor: Predictor) -> Result<Self, ServerError> {
        Ok(Self {
            predictor,
            views: Arc::new(Views::new()?),
        })
    }

    fn page(&self, status: StatusCode, page: &PageView) -> Result<Response, ServerError> {
        let html = self.views.render(page)?;
        Ok((status, Html(html)).into_response())
    }
}

pub fn router(state: AppState, cors: bool) -> Router {
    let app = Router::new()
        .route("/", get(index).post(submit))
        .route("/api/predict", post(predict))
        .route("/api/model", get(model_info))
        .route("/health", get(health))
        .with_state(state);

    if cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
    } else {
        app
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn index(State(state): State<AppState>) -> Result<Response, ServerError> {
    state.page(StatusCode::OK, &PageView::initial())
}

async fn submit(
    State(state): State<AppState>,
    Form(form): Form<PatientForm>,
) -> Result<Response, ServerError> {
    let record = match form.validate() {
        Ok(record) => record,
        Err(errors) => {
            warn!("rejected form submission: {errors}");
            return state.page(
                StatusCode::UNPROCESSABLE_ENTITY,
                &PageView::rejected(&form, &errors),
            );
        }
    };

    match assess(&state.predictor, &record) {
        Ok(assessment) => {
            info!(
                "assessed submission: {:.2}% ({})",
                assessment.percentage, assessment.severity
            );
            state.page(StatusCode::OK, &PageView::assessed(&assessment))
        }
        Err(e) => {
            warn!("prediction failed: {e}");
            state.page(
                StatusCode::INTERNAL_SERVER_ERROR,
                &PageView::failed(&record, &e.to_string()),
            )
        }
    }
}

async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PatientRecord>, JsonRejection>,
) -> Result<Json<Assessment>, ApiError> {
    let Json(record) = payload.map_err(|rejection| {
        warn!("rejected prediction request: {}", rejection.body_text());
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;

    let assessment = assess(&state.predictor, &record)
        .map_err(|e| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    info!(
        "api prediction: {:.2}% ({})",
        assessment.percentage, assessment.severity
    );
    Ok(Json(assessment))
}

#[derive(Debug, Serialize)]
struct ModelInfo {
    metadata: ModelMetadata,
    backend: String,
    encoder: EncoderConfig,
}

async fn model_info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(ModelInfo {
        metadata: state.predictor.metadata().clone(),
        backend: state.predictor.backend_name().to_string(),
        encoder: state.predictor.encoder_config().clone(),
    })
}
