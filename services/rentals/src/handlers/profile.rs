use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Address, AddressInput, Contact, ContactInput, Docs, DocsInput};
use crate::error::RentalsServiceError;
use crate::state::AppState;
use crate::usecase::profile::{
    GetAddressUseCase, GetContactUseCase, GetDocsUseCase, UpsertAddressUseCase,
    UpsertContactUseCase, UpsertDocsUseCase,
};

// ── PUT/GET /persons/{id}/contact ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ContactRequest {
    pub phone: String,
    pub alt_phone: Option<String>,
    pub whatsapp: String,
}

#[derive(Serialize)]
pub struct ContactResponse {
    pub id: i64,
    pub person_id: i64,
    pub phone: String,
    pub alt_phone: Option<String>,
    pub whatsapp: String,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            person_id: contact.person_id,
            phone: contact.phone,
            alt_phone: contact.alt_phone,
            whatsapp: contact.whatsapp,
        }
    }
}

pub async fn upsert_contact(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
    Json(body): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, RentalsServiceError> {
    let usecase = UpsertContactUseCase {
        persons: state.person_repo(),
        repo: state.profile_repo(),
    };
    let contact = usecase
        .execute(
            person_id,
            ContactInput {
                phone: body.phone,
                alt_phone: body.alt_phone,
                whatsapp: body.whatsapp,
            },
        )
        .await?;
    Ok(Json(contact.into()))
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
) -> Result<Json<ContactResponse>, RentalsServiceError> {
    let usecase = GetContactUseCase {
        repo: state.profile_repo(),
    };
    let contact = usecase.execute(person_id).await?;
    Ok(Json(contact.into()))
}

// ── PUT/GET /persons/{id}/address ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddressRequest {
    pub old_address: String,
    pub state: String,
    pub city: String,
    pub pin_code: String,
}

#[derive(Serialize)]
pub struct AddressResponse {
    pub id: i64,
    pub person_id: i64,
    pub old_address: String,
    pub state: String,
    pub city: String,
    pub pin_code: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            person_id: address.person_id,
            old_address: address.old_address,
            state: address.state,
            city: address.city,
            pin_code: address.pin_code,
        }
    }
}

pub async fn upsert_address(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
    Json(body): Json<AddressRequest>,
) -> Result<Json<AddressResponse>, RentalsServiceError> {
    let usecase = UpsertAddressUseCase {
        persons: state.person_repo(),
        repo: state.profile_repo(),
    };
    let address = usecase
        .execute(
            person_id,
            AddressInput {
                old_address: body.old_address,
                state: body.state,
                city: body.city,
                pin_code: body.pin_code,
            },
        )
        .await?;
    Ok(Json(address.into()))
}

pub async fn get_address(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
) -> Result<Json<AddressResponse>, RentalsServiceError> {
    let usecase = GetAddressUseCase {
        repo: state.profile_repo(),
    };
    let address = usecase.execute(person_id).await?;
    Ok(Json(address.into()))
}

// ── PUT/GET /persons/{id}/docs ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DocsRequest {
    pub aadhaar_no: String,
    pub aadhaar_doc: Option<String>,
    pub pan_no: String,
    pub pan_doc: Option<String>,
}

#[derive(Serialize)]
pub struct DocsResponse {
    pub id: i64,
    pub person_id: i64,
    pub aadhaar_no: String,
    pub aadhaar_doc: Option<String>,
    pub pan_no: String,
    pub pan_doc: Option<String>,
}

impl From<Docs> for DocsResponse {
    fn from(docs: Docs) -> Self {
        Self {
            id: docs.id,
            person_id: docs.person_id,
            aadhaar_no: docs.aadhaar_no,
            aadhaar_doc: docs.aadhaar_doc,
            pan_no: docs.pan_no,
            pan_doc: docs.pan_doc,
        }
    }
}

pub async fn upsert_docs(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
    Json(body): Json<DocsRequest>,
) -> Result<Json<DocsResponse>, RentalsServiceError> {
    let usecase = UpsertDocsUseCase {
        persons: state.person_repo(),
        repo: state.profile_repo(),
    };
    let docs = usecase
        .execute(
            person_id,
            DocsInput {
                aadhaar_no: body.aadhaar_no,
                aadhaar_doc: body.aadhaar_doc,
                pan_no: body.pan_no,
                pan_doc: body.pan_doc,
            },
        )
        .await?;
    Ok(Json(docs.into()))
}

pub async fn get_docs(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
) -> Result<Json<DocsResponse>, RentalsServiceError> {
    let usecase = GetDocsUseCase {
        repo: state.profile_repo(),
    };
    let docs = usecase.execute(person_id).await?;
    Ok(Json(docs.into()))
}
