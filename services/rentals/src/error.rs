use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Rentals service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum RentalsServiceError {
    #[error("person not found")]
    PersonNotFound,
    #[error("contact not found")]
    ContactNotFound,
    #[error("address not found")]
    AddressNotFound,
    #[error("docs not found")]
    DocsNotFound,
    #[error("room not found")]
    RoomNotFound,
    #[error("meter details not found")]
    MeterNotFound,
    #[error("allotment not found")]
    AllotmentNotFound,
    #[error("rental details not found")]
    RentalDetailsNotFound,
    #[error("transaction not found")]
    TransactionNotFound,
    #[error("notice not found")]
    NoticeNotFound,
    #[error("person already exists")]
    PersonAlreadyExists,
    #[error("room code already exists")]
    DuplicateRoomCode,
    #[error("Room already occupied!")]
    RoomOccupied,
    #[error("already de-activated")]
    AlreadyDeallotted,
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("missing data")]
    MissingData,
    /// Generated transaction number hit the unique constraint. Retryable;
    /// never surfaced to clients directly.
    #[error("transaction number collision")]
    TxnNumberCollision,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RentalsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PersonNotFound => "PERSON_NOT_FOUND",
            Self::ContactNotFound => "CONTACT_NOT_FOUND",
            Self::AddressNotFound => "ADDRESS_NOT_FOUND",
            Self::DocsNotFound => "DOCS_NOT_FOUND",
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::MeterNotFound => "METER_NOT_FOUND",
            Self::AllotmentNotFound => "ALLOTMENT_NOT_FOUND",
            Self::RentalDetailsNotFound => "RENTAL_DETAILS_NOT_FOUND",
            Self::TransactionNotFound => "TRANSACTION_NOT_FOUND",
            Self::NoticeNotFound => "NOTICE_NOT_FOUND",
            Self::PersonAlreadyExists => "PERSON_ALREADY_EXISTS",
            Self::DuplicateRoomCode => "DUPLICATE_ROOM_CODE",
            Self::RoomOccupied => "ROOM_OCCUPIED",
            Self::AlreadyDeallotted => "ALREADY_DEALLOTTED",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::MissingData => "MISSING_DATA",
            Self::TxnNumberCollision => "TXN_NUMBER_COLLISION",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for RentalsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::PersonNotFound
            | Self::ContactNotFound
            | Self::AddressNotFound
            | Self::DocsNotFound
            | Self::RoomNotFound
            | Self::MeterNotFound
            | Self::AllotmentNotFound
            | Self::RentalDetailsNotFound
            | Self::TransactionNotFound
            | Self::NoticeNotFound => StatusCode::NOT_FOUND,
            Self::PersonAlreadyExists
            | Self::DuplicateRoomCode
            | Self::RoomOccupied
            | Self::AlreadyDeallotted => StatusCode::CONFLICT,
            Self::NegativeAmount | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::TxnNumberCollision | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

// Lets repository transactions use this error directly as the closure
// error type.
impl From<sea_orm::DbErr> for RentalsServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Internal(anyhow::Error::new(e))
    }
}
