use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Allotment, AllotmentExtra, ExtraPatch, NewAllotment};
use crate::error::RentalsServiceError;
use crate::state::AppState;
use crate::usecase::allotment::{
    CreateAllotmentUseCase, GetAllotmentUseCase, ListAllotmentsByPersonUseCase,
    TerminateAllotmentUseCase, UpdateExtraUseCase,
};

#[derive(Serialize)]
pub struct AllotmentResponse {
    pub id: i64,
    pub person_id: i64,
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_end_date: Option<NaiveDate>,
    pub is_active: bool,
    #[serde(serialize_with = "rentman_core::serde::to_rfc3339_ms")]
    pub ts: chrono::DateTime<chrono::Utc>,
}

impl From<Allotment> for AllotmentResponse {
    fn from(allotment: Allotment) -> Self {
        Self {
            id: allotment.id,
            person_id: allotment.person_id,
            room_id: allotment.room_id,
            start_date: allotment.start_date,
            end_date: allotment.end_date,
            actual_end_date: allotment.actual_end_date,
            is_active: allotment.is_active,
            ts: allotment.ts,
        }
    }
}

#[derive(Serialize)]
pub struct ExtraResponse {
    pub id: i64,
    pub allotment_id: i64,
    pub agg_available: bool,
    pub is_painted: bool,
    pub is_water_tank: bool,
    pub is_grill: bool,
    pub is_ele_bill_clear: bool,
}

impl From<AllotmentExtra> for ExtraResponse {
    fn from(extra: AllotmentExtra) -> Self {
        Self {
            id: extra.id,
            allotment_id: extra.allotment_id,
            agg_available: extra.agg_available,
            is_painted: extra.is_painted,
            is_water_tank: extra.is_water_tank,
            is_grill: extra.is_grill,
            is_ele_bill_clear: extra.is_ele_bill_clear,
        }
    }
}

// ── POST /persons/{id}/allotments ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAllotmentRequest {
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

pub async fn create_allotment(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
    Json(body): Json<CreateAllotmentRequest>,
) -> Result<(StatusCode, Json<AllotmentResponse>), RentalsServiceError> {
    let usecase = CreateAllotmentUseCase {
        persons: state.person_repo(),
        rooms: state.room_repo(),
        repo: state.allotment_repo(),
        clock: state.clock.clone(),
    };
    let allotment = usecase
        .execute(
            person_id,
            NewAllotment {
                room_id: body.room_id,
                start_date: body.start_date,
                end_date: body.end_date,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(allotment.into())))
}

// ── GET /persons/{id}/allotments ─────────────────────────────────────────────

pub async fn list_allotments_by_person(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
) -> Result<Json<Vec<AllotmentResponse>>, RentalsServiceError> {
    let usecase = ListAllotmentsByPersonUseCase {
        persons: state.person_repo(),
        repo: state.allotment_repo(),
    };
    let allotments = usecase.execute(person_id).await?;
    Ok(Json(allotments.into_iter().map(Into::into).collect()))
}

// ── GET /allotments/{id} ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AllotmentDetailResponse {
    #[serde(flatten)]
    pub allotment: AllotmentResponse,
    pub extra: Option<ExtraResponse>,
}

pub async fn get_allotment(
    State(state): State<AppState>,
    Path(allotment_id): Path<i64>,
) -> Result<Json<AllotmentDetailResponse>, RentalsServiceError> {
    let usecase = GetAllotmentUseCase {
        repo: state.allotment_repo(),
    };
    let (allotment, extra) = usecase.execute(allotment_id).await?;
    Ok(Json(AllotmentDetailResponse {
        allotment: allotment.into(),
        extra: extra.map(Into::into),
    }))
}

// ── PATCH /allotments/{id}/terminate ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct TerminateRequest {
    pub actual_end_date: Option<NaiveDate>,
}

pub async fn terminate_allotment(
    State(state): State<AppState>,
    Path(allotment_id): Path<i64>,
    Json(body): Json<TerminateRequest>,
) -> Result<Json<AllotmentResponse>, RentalsServiceError> {
    let usecase = TerminateAllotmentUseCase {
        repo: state.allotment_repo(),
        ledger: state.ledger_repo(),
        outbox: state.outbox_repo(),
        clock: state.clock.clone(),
    };
    let allotment = usecase.execute(allotment_id, body.actual_end_date).await?;
    Ok(Json(allotment.into()))
}

// ── PATCH /allotments/{id}/extra ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateExtraRequest {
    pub agg_available: Option<bool>,
    pub is_painted: Option<bool>,
    pub is_water_tank: Option<bool>,
    pub is_grill: Option<bool>,
    pub is_ele_bill_clear: Option<bool>,
}

pub async fn update_extra(
    State(state): State<AppState>,
    Path(allotment_id): Path<i64>,
    Json(body): Json<UpdateExtraRequest>,
) -> Result<Json<ExtraResponse>, RentalsServiceError> {
    let usecase = UpdateExtraUseCase {
        repo: state.allotment_repo(),
    };
    let extra = usecase
        .execute(
            allotment_id,
            ExtraPatch {
                agg_available: body.agg_available,
                is_painted: body.is_painted,
                is_water_tank: body.is_water_tank,
                is_grill: body.is_grill,
                is_ele_bill_clear: body.is_ele_bill_clear,
            },
        )
        .await?;
    Ok(Json(extra.into()))
}
