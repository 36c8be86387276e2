use crate::domain::repository::{PersonRepository, ProfileRepository};
use crate::domain::types::{Address, AddressInput, Contact, ContactInput, Docs, DocsInput};
use crate::error::RentalsServiceError;

// Each profile record is 1:1 with a person; writes are upserts so a second
// PUT replaces the first instead of accumulating rows.

// ── Contact ──────────────────────────────────────────────────────────────────

pub struct UpsertContactUseCase<P: PersonRepository, R: ProfileRepository> {
    pub persons: P,
    pub repo: R,
}

impl<P: PersonRepository, R: ProfileRepository> UpsertContactUseCase<P, R> {
    pub async fn execute(
        &self,
        person_id: i64,
        input: ContactInput,
    ) -> Result<Contact, RentalsServiceError> {
        if self.persons.find_by_id(person_id).await?.is_none() {
            return Err(RentalsServiceError::PersonNotFound);
        }
        self.repo.upsert_contact(person_id, &input).await
    }
}

pub struct GetContactUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> GetContactUseCase<R> {
    pub async fn execute(&self, person_id: i64) -> Result<Contact, RentalsServiceError> {
        self.repo
            .find_contact(person_id)
            .await?
            .ok_or(RentalsServiceError::ContactNotFound)
    }
}

// ── Address ──────────────────────────────────────────────────────────────────

pub struct UpsertAddressUseCase<P: PersonRepository, R: ProfileRepository> {
    pub persons: P,
    pub repo: R,
}

impl<P: PersonRepository, R: ProfileRepository> UpsertAddressUseCase<P, R> {
    pub async fn execute(
        &self,
        person_id: i64,
        input: AddressInput,
    ) -> Result<Address, RentalsServiceError> {
        if self.persons.find_by_id(person_id).await?.is_none() {
            return Err(RentalsServiceError::PersonNotFound);
        }
        self.repo.upsert_address(person_id, &input).await
    }
}

pub struct GetAddressUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> GetAddressUseCase<R> {
    pub async fn execute(&self, person_id: i64) -> Result<Address, RentalsServiceError> {
        self.repo
            .find_address(person_id)
            .await?
            .ok_or(RentalsServiceError::AddressNotFound)
    }
}

// ── Docs ─────────────────────────────────────────────────────────────────────

pub struct UpsertDocsUseCase<P: PersonRepository, R: ProfileRepository> {
    pub persons: P,
    pub repo: R,
}

impl<P: PersonRepository, R: ProfileRepository> UpsertDocsUseCase<P, R> {
    pub async fn execute(
        &self,
        person_id: i64,
        input: DocsInput,
    ) -> Result<Docs, RentalsServiceError> {
        if self.persons.find_by_id(person_id).await?.is_none() {
            return Err(RentalsServiceError::PersonNotFound);
        }
        self.repo.upsert_docs(person_id, &input).await
    }
}

pub struct GetDocsUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> GetDocsUseCase<R> {
    pub async fn execute(&self, person_id: i64) -> Result<Docs, RentalsServiceError> {
        self.repo
            .find_docs(person_id)
            .await?
            .ok_or(RentalsServiceError::DocsNotFound)
    }
}
