use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use rentman_domain::pagination::Sort;
use rentman_domain::types::PaymentMode;

use crate::domain::types::{NewTransaction, RentTransaction, RentalDetails};
use crate::error::RentalsServiceError;
use crate::state::AppState;
use crate::usecase::ledger::{
    CreateTransactionUseCase, GetRentalDetailsUseCase, ListRentalDetailsByPersonUseCase,
    ListTransactionsByPersonUseCase, ListTransactionsUseCase, UpsertRentalDetailsInput,
    UpsertRentalDetailsUseCase,
};

// ── PUT/GET /allotments/{id}/rental-details ──────────────────────────────────

#[derive(Deserialize)]
pub struct RentalDetailsRequest {
    pub deposit: i64,
    pub rent: i64,
    pub maintenance: i64,
}

#[derive(Serialize)]
pub struct RentalDetailsResponse {
    pub id: i64,
    pub allotment_id: i64,
    pub deposit: i64,
    pub rent: i64,
    pub maintenance: i64,
    pub rent_total: i64,
}

impl From<RentalDetails> for RentalDetailsResponse {
    fn from(details: RentalDetails) -> Self {
        Self {
            id: details.id,
            allotment_id: details.allotment_id,
            deposit: details.deposit,
            rent: details.rent,
            maintenance: details.maintenance,
            rent_total: details.rent_total,
        }
    }
}

pub async fn upsert_rental_details(
    State(state): State<AppState>,
    Path(allotment_id): Path<i64>,
    Json(body): Json<RentalDetailsRequest>,
) -> Result<Json<RentalDetailsResponse>, RentalsServiceError> {
    let usecase = UpsertRentalDetailsUseCase {
        allotments: state.allotment_repo(),
        ledger: state.ledger_repo(),
        clock: state.clock.clone(),
    };
    let details = usecase
        .execute(
            allotment_id,
            UpsertRentalDetailsInput {
                deposit: body.deposit,
                rent: body.rent,
                maintenance: body.maintenance,
            },
        )
        .await?;
    Ok(Json(details.into()))
}

pub async fn get_rental_details(
    State(state): State<AppState>,
    Path(allotment_id): Path<i64>,
) -> Result<Json<RentalDetailsResponse>, RentalsServiceError> {
    let usecase = GetRentalDetailsUseCase {
        ledger: state.ledger_repo(),
    };
    let details = usecase.execute(allotment_id).await?;
    Ok(Json(details.into()))
}

// ── GET /persons/{id}/rental-details ─────────────────────────────────────────

pub async fn list_rental_details_by_person(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
) -> Result<Json<Vec<RentalDetailsResponse>>, RentalsServiceError> {
    let usecase = ListRentalDetailsByPersonUseCase {
        ledger: state.ledger_repo(),
    };
    let details = usecase.execute(person_id).await?;
    Ok(Json(details.into_iter().map(Into::into).collect()))
}

// ── POST/GET /allotments/{id}/transactions ───────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTransactionRequest {
    pub amount: i64,
    #[serde(default)]
    pub is_rent: bool,
    pub payment_mode: Option<PaymentMode>,
    pub comment: Option<String>,
}

#[derive(Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub tnx_no: String,
    pub allotment_id: i64,
    pub amount: i64,
    pub is_rent: bool,
    pub payment_mode: PaymentMode,
    pub comment: Option<String>,
    pub receipt: Option<String>,
    #[serde(serialize_with = "rentman_core::serde::to_rfc3339_ms")]
    pub ts: chrono::DateTime<chrono::Utc>,
}

impl From<RentTransaction> for TransactionResponse {
    fn from(tnx: RentTransaction) -> Self {
        Self {
            id: tnx.id,
            tnx_no: tnx.tnx_no,
            allotment_id: tnx.allotment_id,
            amount: tnx.amount,
            is_rent: tnx.is_rent,
            payment_mode: tnx.payment_mode,
            comment: tnx.comment,
            receipt: tnx.receipt,
            ts: tnx.ts,
        }
    }
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Path(allotment_id): Path<i64>,
    Json(body): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), RentalsServiceError> {
    let usecase = CreateTransactionUseCase {
        allotments: state.allotment_repo(),
        rooms: state.room_repo(),
        ledger: state.ledger_repo(),
        receipts: state.receipt_store(),
        outbox: state.outbox_repo(),
        clock: state.clock.clone(),
    };
    let tnx = usecase
        .execute(
            allotment_id,
            NewTransaction {
                amount: body.amount,
                is_rent: body.is_rent,
                payment_mode: body.payment_mode.unwrap_or_default(),
                comment: body.comment,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(tnx.into())))
}

#[derive(Deserialize)]
pub struct TransactionListQuery {
    pub sort: Option<Sort>,
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Path(allotment_id): Path<i64>,
    Query(query): Query<TransactionListQuery>,
) -> Result<Json<Vec<TransactionResponse>>, RentalsServiceError> {
    let usecase = ListTransactionsUseCase {
        allotments: state.allotment_repo(),
        ledger: state.ledger_repo(),
    };
    let transactions = usecase
        .execute(allotment_id, query.sort.unwrap_or(Sort::Desc))
        .await?;
    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

// ── GET /persons/{id}/transactions ───────────────────────────────────────────

pub async fn list_transactions_by_person(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
) -> Result<Json<Vec<TransactionResponse>>, RentalsServiceError> {
    let usecase = ListTransactionsByPersonUseCase {
        ledger: state.ledger_repo(),
    };
    let transactions = usecase.execute(person_id).await?;
    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}
