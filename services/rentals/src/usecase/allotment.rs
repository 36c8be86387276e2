use std::sync::Arc;

use chrono::NaiveDate;

use rentman_domain::clock::Clock;
use rentman_domain::lease;
use rentman_domain::pagination::Sort;

use crate::domain::repository::{
    AllotmentRepository, LedgerRepository, OutboxRepository, PersonRepository, RoomRepository,
};
use crate::domain::types::{Allotment, AllotmentExtra, ExtraPatch, NewAllotment, NewOutboxEvent};
use crate::error::RentalsServiceError;

// ── CreateAllotment ──────────────────────────────────────────────────────────

pub struct CreateAllotmentUseCase<P, R, A>
where
    P: PersonRepository,
    R: RoomRepository,
    A: AllotmentRepository,
{
    pub persons: P,
    pub rooms: R,
    pub repo: A,
    pub clock: Arc<dyn Clock>,
}

impl<P, R, A> CreateAllotmentUseCase<P, R, A>
where
    P: PersonRepository,
    R: RoomRepository,
    A: AllotmentRepository,
{
    pub async fn execute(
        &self,
        person_id: i64,
        input: NewAllotment,
    ) -> Result<Allotment, RentalsServiceError> {
        if self.persons.find_by_id(person_id).await?.is_none() {
            return Err(RentalsServiceError::PersonNotFound);
        }
        if self.rooms.find_by_id(input.room_id).await?.is_none() {
            return Err(RentalsServiceError::RoomNotFound);
        }
        // 11-month default lease. is_active is forced true even when the
        // resulting period lies in the past.
        let end_date = input
            .end_date
            .unwrap_or_else(|| lease::default_end_date(input.start_date));
        self.repo
            .create_active(
                person_id,
                input.room_id,
                input.start_date,
                end_date,
                self.clock.now(),
            )
            .await
    }
}

// ── GetAllotment ─────────────────────────────────────────────────────────────

pub struct GetAllotmentUseCase<A: AllotmentRepository> {
    pub repo: A,
}

impl<A: AllotmentRepository> GetAllotmentUseCase<A> {
    pub async fn execute(
        &self,
        allotment_id: i64,
    ) -> Result<(Allotment, Option<AllotmentExtra>), RentalsServiceError> {
        let allotment = self
            .repo
            .find_by_id(allotment_id)
            .await?
            .ok_or(RentalsServiceError::AllotmentNotFound)?;
        let extra = self.repo.find_extra(allotment_id).await?;
        Ok((allotment, extra))
    }
}

// ── ListAllotmentsByPerson ───────────────────────────────────────────────────

pub struct ListAllotmentsByPersonUseCase<P: PersonRepository, A: AllotmentRepository> {
    pub persons: P,
    pub repo: A,
}

impl<P: PersonRepository, A: AllotmentRepository> ListAllotmentsByPersonUseCase<P, A> {
    pub async fn execute(&self, person_id: i64) -> Result<Vec<Allotment>, RentalsServiceError> {
        if self.persons.find_by_id(person_id).await?.is_none() {
            return Err(RentalsServiceError::PersonNotFound);
        }
        self.repo.list_by_person(person_id).await
    }
}

// ── TerminateAllotment ───────────────────────────────────────────────────────

pub struct TerminateAllotmentUseCase<A, L, O>
where
    A: AllotmentRepository,
    L: LedgerRepository,
    O: OutboxRepository,
{
    pub repo: A,
    pub ledger: L,
    pub outbox: O,
    pub clock: Arc<dyn Clock>,
}

impl<A, L, O> TerminateAllotmentUseCase<A, L, O>
where
    A: AllotmentRepository,
    L: LedgerRepository,
    O: OutboxRepository,
{
    pub async fn execute(
        &self,
        allotment_id: i64,
        actual_end_date: Option<NaiveDate>,
    ) -> Result<Allotment, RentalsServiceError> {
        let date = actual_end_date.unwrap_or_else(|| self.clock.now().date_naive());
        let allotment = self.repo.terminate(allotment_id, date).await?;

        // De-allotment summary with the full payment history, oldest first,
        // rows numbered from 1. Delivery is fire-and-forget.
        let history = self.ledger.list_by_allotment(allotment_id, Sort::Asc).await?;
        let payments: Vec<serde_json::Value> = history
            .iter()
            .enumerate()
            .map(|(i, tnx)| {
                serde_json::json!({
                    "no": i + 1,
                    "tnx_no": tnx.tnx_no,
                    "amount": tnx.amount,
                    "payment_mode": tnx.payment_mode.as_str(),
                    "ts": tnx.ts.to_rfc3339(),
                })
            })
            .collect();
        let event = NewOutboxEvent {
            kind: "allotment.terminated".to_owned(),
            payload: serde_json::json!({
                "allotment_id": allotment.id,
                "person_id": allotment.person_id,
                "room_id": allotment.room_id,
                "actual_end_date": date.to_string(),
                "payments": payments,
            }),
            idempotency_key: format!("allotment.terminated:{}", allotment.id),
        };
        if let Err(e) = self.outbox.enqueue(&event).await {
            tracing::warn!(error = %e, allotment_id, "failed to enqueue termination notice");
        }
        Ok(allotment)
    }
}

// ── UpdateExtra ──────────────────────────────────────────────────────────────

pub struct UpdateExtraUseCase<A: AllotmentRepository> {
    pub repo: A,
}

impl<A: AllotmentRepository> UpdateExtraUseCase<A> {
    pub async fn execute(
        &self,
        allotment_id: i64,
        patch: ExtraPatch,
    ) -> Result<AllotmentExtra, RentalsServiceError> {
        if patch.is_empty() {
            return Err(RentalsServiceError::MissingData);
        }
        if self.repo.find_by_id(allotment_id).await?.is_none() {
            return Err(RentalsServiceError::AllotmentNotFound);
        }
        self.repo.update_extra(allotment_id, &patch).await
    }
}
