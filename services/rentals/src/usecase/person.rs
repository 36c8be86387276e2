use std::sync::Arc;

use rentman_domain::clock::Clock;

use crate::domain::repository::PersonRepository;
use crate::domain::types::{NewPerson, Person, PersonPatch};
use crate::error::RentalsServiceError;

// ── CreatePerson ─────────────────────────────────────────────────────────────

pub struct CreatePersonUseCase<R: PersonRepository> {
    pub repo: R,
    pub clock: Arc<dyn Clock>,
}

impl<R: PersonRepository> CreatePersonUseCase<R> {
    pub async fn execute(&self, input: NewPerson) -> Result<Person, RentalsServiceError> {
        self.repo.create(&input, self.clock.now()).await
    }
}

// ── GetPerson ────────────────────────────────────────────────────────────────

pub struct GetPersonUseCase<R: PersonRepository> {
    pub repo: R,
}

impl<R: PersonRepository> GetPersonUseCase<R> {
    pub async fn execute(&self, person_id: i64) -> Result<Person, RentalsServiceError> {
        self.repo
            .find_by_id(person_id)
            .await?
            .ok_or(RentalsServiceError::PersonNotFound)
    }
}

// ── ListPersons ──────────────────────────────────────────────────────────────

pub struct ListPersonsUseCase<R: PersonRepository> {
    pub repo: R,
}

impl<R: PersonRepository> ListPersonsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Person>, RentalsServiceError> {
        self.repo.list().await
    }
}

// ── UpdatePerson ─────────────────────────────────────────────────────────────

pub struct UpdatePersonUseCase<R: PersonRepository> {
    pub repo: R,
}

impl<R: PersonRepository> UpdatePersonUseCase<R> {
    pub async fn execute(
        &self,
        person_id: i64,
        patch: PersonPatch,
    ) -> Result<Person, RentalsServiceError> {
        if patch.is_empty() {
            return Err(RentalsServiceError::MissingData);
        }
        if self.repo.find_by_id(person_id).await?.is_none() {
            return Err(RentalsServiceError::PersonNotFound);
        }
        self.repo.update(person_id, &patch).await?;
        self.repo
            .find_by_id(person_id)
            .await?
            .ok_or(RentalsServiceError::PersonNotFound)
    }
}

// ── DeletePerson ─────────────────────────────────────────────────────────────

pub struct DeletePersonUseCase<R: PersonRepository> {
    pub repo: R,
}

impl<R: PersonRepository> DeletePersonUseCase<R> {
    pub async fn execute(&self, person_id: i64) -> Result<(), RentalsServiceError> {
        if self.repo.delete(person_id).await? {
            Ok(())
        } else {
            Err(RentalsServiceError::PersonNotFound)
        }
    }
}
