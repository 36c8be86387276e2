use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use rentman_domain::types::Role;

use crate::domain::types::{NewPerson, Person, PersonPatch};
use crate::error::RentalsServiceError;
use crate::state::AppState;
use crate::usecase::person::{
    CreatePersonUseCase, DeletePersonUseCase, GetPersonUseCase, ListPersonsUseCase,
    UpdatePersonUseCase,
};

#[derive(Serialize)]
pub struct PersonResponse {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: Option<String>,
    pub role: Role,
    #[serde(serialize_with = "rentman_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            username: person.username,
            first_name: person.first_name,
            middle_name: person.middle_name,
            last_name: person.last_name,
            email: person.email,
            role: person.role,
            created_at: person.created_at,
        }
    }
}

// ── POST /persons ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePersonRequest {
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: Option<String>,
    pub role: Option<Role>,
}

pub async fn create_person(
    State(state): State<AppState>,
    Json(body): Json<CreatePersonRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), RentalsServiceError> {
    let usecase = CreatePersonUseCase {
        repo: state.person_repo(),
        clock: state.clock.clone(),
    };
    let person = usecase
        .execute(NewPerson {
            username: body.username,
            first_name: body.first_name,
            middle_name: body.middle_name,
            last_name: body.last_name,
            email: body.email,
            role: body.role.unwrap_or_default(),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(person.into())))
}

// ── GET /persons ─────────────────────────────────────────────────────────────

pub async fn list_persons(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonResponse>>, RentalsServiceError> {
    let usecase = ListPersonsUseCase {
        repo: state.person_repo(),
    };
    let persons = usecase.execute().await?;
    Ok(Json(persons.into_iter().map(Into::into).collect()))
}

// ── GET /persons/{id} ────────────────────────────────────────────────────────

pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
) -> Result<Json<PersonResponse>, RentalsServiceError> {
    let usecase = GetPersonUseCase {
        repo: state.person_repo(),
    };
    let person = usecase.execute(person_id).await?;
    Ok(Json(person.into()))
}

// ── PATCH /persons/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdatePersonRequest {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
    Json(body): Json<UpdatePersonRequest>,
) -> Result<Json<PersonResponse>, RentalsServiceError> {
    let usecase = UpdatePersonUseCase {
        repo: state.person_repo(),
    };
    let person = usecase
        .execute(
            person_id,
            PersonPatch {
                first_name: body.first_name,
                middle_name: body.middle_name,
                last_name: body.last_name,
                email: body.email,
                role: body.role,
            },
        )
        .await?;
    Ok(Json(person.into()))
}

// ── DELETE /persons/{id} ─────────────────────────────────────────────────────

pub async fn delete_person(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
) -> Result<StatusCode, RentalsServiceError> {
    let usecase = DeletePersonUseCase {
        repo: state.person_repo(),
    };
    usecase.execute(person_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
