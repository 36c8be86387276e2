#![allow(async_fn_in_trait)]

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use rentman_domain::pagination::Sort;

use crate::domain::types::{
    Address, AddressInput, Allotment, AllotmentExtra, Contact, ContactInput, Docs, DocsInput,
    ExtraPatch, MeterDetails, MeterInput, NewOutboxEvent, NewPerson, Notice, OutboxEvent, Person,
    PersonPatch, RentTransaction, RentalDetails, RentalDetailsDraft, Room, RoomDraft,
    TransactionDraft,
};
use crate::error::RentalsServiceError;

/// Repository for person records.
pub trait PersonRepository: Send + Sync {
    async fn create(
        &self,
        person: &NewPerson,
        created_at: DateTime<Utc>,
    ) -> Result<Person, RentalsServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Person>, RentalsServiceError>;
    async fn list(&self) -> Result<Vec<Person>, RentalsServiceError>;
    async fn update(&self, id: i64, patch: &PersonPatch) -> Result<(), RentalsServiceError>;
    /// Delete a person. Returns `true` if a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, RentalsServiceError>;
}

/// Repository for the 1:1 person profile records (contact, address, docs).
/// All writes are upserts keyed on `person_id`.
pub trait ProfileRepository: Send + Sync {
    async fn upsert_contact(
        &self,
        person_id: i64,
        input: &ContactInput,
    ) -> Result<Contact, RentalsServiceError>;
    async fn find_contact(&self, person_id: i64) -> Result<Option<Contact>, RentalsServiceError>;

    async fn upsert_address(
        &self,
        person_id: i64,
        input: &AddressInput,
    ) -> Result<Address, RentalsServiceError>;
    async fn find_address(&self, person_id: i64) -> Result<Option<Address>, RentalsServiceError>;

    async fn upsert_docs(
        &self,
        person_id: i64,
        input: &DocsInput,
    ) -> Result<Docs, RentalsServiceError>;
    async fn find_docs(&self, person_id: i64) -> Result<Option<Docs>, RentalsServiceError>;
}

/// Repository for rooms and their meter records.
pub trait RoomRepository: Send + Sync {
    async fn create(&self, draft: &RoomDraft) -> Result<Room, RentalsServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, RentalsServiceError>;
    /// List rooms, optionally filtered by canonical building code.
    async fn list(&self, building: Option<&str>) -> Result<Vec<Room>, RentalsServiceError>;
    async fn update(&self, id: i64, draft: &RoomDraft) -> Result<(), RentalsServiceError>;
    /// Delete a room. Returns `true` if a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, RentalsServiceError>;

    async fn upsert_meter(
        &self,
        room_id: i64,
        input: &MeterInput,
    ) -> Result<MeterDetails, RentalsServiceError>;
    async fn find_meter(&self, room_id: i64) -> Result<Option<MeterDetails>, RentalsServiceError>;
}

/// Repository for the allotment lifecycle.
pub trait AllotmentRepository: Send + Sync {
    /// Insert an active allotment and get-or-create its extra record in one
    /// transaction. The room row is locked for the no-active-allotment
    /// check; a concurrent active allotment yields
    /// [`RentalsServiceError::RoomOccupied`].
    async fn create_active(
        &self,
        person_id: i64,
        room_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        ts: DateTime<Utc>,
    ) -> Result<Allotment, RentalsServiceError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Allotment>, RentalsServiceError>;
    async fn list_by_person(&self, person_id: i64)
    -> Result<Vec<Allotment>, RentalsServiceError>;

    /// Deactivate an allotment and stamp `actual_end_date`. The row is
    /// locked; an already-inactive allotment yields
    /// [`RentalsServiceError::AlreadyDeallotted`].
    async fn terminate(
        &self,
        id: i64,
        actual_end_date: NaiveDate,
    ) -> Result<Allotment, RentalsServiceError>;

    async fn find_extra(
        &self,
        allotment_id: i64,
    ) -> Result<Option<AllotmentExtra>, RentalsServiceError>;
    async fn update_extra(
        &self,
        allotment_id: i64,
        patch: &ExtraPatch,
    ) -> Result<AllotmentExtra, RentalsServiceError>;

    /// Distinct room ids referenced by an active allotment.
    async fn active_room_ids(&self) -> Result<Vec<i64>, RentalsServiceError>;
}

/// Repository for rental details and rent transactions.
pub trait LedgerRepository: Send + Sync {
    async fn upsert_rental_details(
        &self,
        allotment_id: i64,
        draft: &RentalDetailsDraft,
        ts: DateTime<Utc>,
    ) -> Result<RentalDetails, RentalsServiceError>;
    async fn find_rental_details(
        &self,
        allotment_id: i64,
    ) -> Result<Option<RentalDetails>, RentalsServiceError>;
    async fn list_rental_details_by_person(
        &self,
        person_id: i64,
    ) -> Result<Vec<RentalDetails>, RentalsServiceError>;

    /// Insert a transaction. A unique violation on `tnx_no` yields
    /// [`RentalsServiceError::TxnNumberCollision`].
    async fn create_transaction(
        &self,
        draft: &TransactionDraft,
    ) -> Result<RentTransaction, RentalsServiceError>;
    /// Attach the receipt path to a stored transaction. Deliberately a
    /// separate, non-atomic step after the insert.
    async fn attach_receipt(&self, id: i64, path: &str) -> Result<(), RentalsServiceError>;
    async fn list_by_allotment(
        &self,
        allotment_id: i64,
        sort: Sort,
    ) -> Result<Vec<RentTransaction>, RentalsServiceError>;
    async fn list_by_person(
        &self,
        person_id: i64,
    ) -> Result<Vec<RentTransaction>, RentalsServiceError>;
}

/// Repository for notices.
pub trait NoticeRepository: Send + Sync {
    async fn create(
        &self,
        allotment_id: i64,
        code: &str,
        description: Option<&str>,
        ts: DateTime<Utc>,
    ) -> Result<Notice, RentalsServiceError>;
    async fn list_by_allotment(
        &self,
        allotment_id: i64,
    ) -> Result<Vec<Notice>, RentalsServiceError>;
    /// Delete a notice. Returns `true` if a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, RentalsServiceError>;
}

/// Repository backing the notification outbox.
pub trait OutboxRepository: Send + Sync {
    async fn enqueue(&self, event: &NewOutboxEvent) -> Result<(), RentalsServiceError>;
    /// Unprocessed events due at `now`, oldest first.
    async fn due(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<OutboxEvent>, RentalsServiceError>;
    async fn mark_processed(&self, id: Uuid, now: DateTime<Utc>)
    -> Result<(), RentalsServiceError>;
    /// Record a delivery failure. `next_attempt_at = None` marks the event
    /// permanently failed.
    async fn mark_failed(
        &self,
        id: Uuid,
        error: &str,
        now: DateTime<Utc>,
        next_attempt_at: Option<DateTime<Utc>>,
    ) -> Result<(), RentalsServiceError>;
}

/// Port for writing receipt artifacts. Returns the stored path.
pub trait ReceiptStore: Send + Sync {
    async fn write(&self, tnx: &RentTransaction) -> Result<String, RentalsServiceError>;
}

/// Port for delivering outbox events to the outside world (email, WhatsApp).
pub trait DeliveryPort: Send + Sync {
    async fn deliver(&self, kind: &str, payload: &serde_json::Value) -> anyhow::Result<()>;
}
