use std::sync::Arc;

use rentman_domain::clock::Clock;
use rentman_domain::pagination::Sort;
use rentman_domain::{ledger, txn};

use crate::domain::repository::{
    AllotmentRepository, LedgerRepository, OutboxRepository, ReceiptStore, RoomRepository,
};
use crate::domain::types::{
    NewOutboxEvent, NewTransaction, RentTransaction, RentalDetails, RentalDetailsDraft,
    TransactionDraft,
};
use crate::error::RentalsServiceError;

// ── UpsertRentalDetails ──────────────────────────────────────────────────────

pub struct UpsertRentalDetailsInput {
    pub deposit: i64,
    pub rent: i64,
    pub maintenance: i64,
}

pub struct UpsertRentalDetailsUseCase<A: AllotmentRepository, L: LedgerRepository> {
    pub allotments: A,
    pub ledger: L,
    pub clock: Arc<dyn Clock>,
}

impl<A: AllotmentRepository, L: LedgerRepository> UpsertRentalDetailsUseCase<A, L> {
    pub async fn execute(
        &self,
        allotment_id: i64,
        input: UpsertRentalDetailsInput,
    ) -> Result<RentalDetails, RentalsServiceError> {
        if input.deposit < 0 || input.rent < 0 || input.maintenance < 0 {
            return Err(RentalsServiceError::NegativeAmount);
        }
        if self.allotments.find_by_id(allotment_id).await?.is_none() {
            return Err(RentalsServiceError::AllotmentNotFound);
        }
        let prior_total = self
            .ledger
            .find_rental_details(allotment_id)
            .await?
            .map(|d| d.rent_total)
            .unwrap_or(0);
        let draft = RentalDetailsDraft {
            deposit: input.deposit,
            rent: input.rent,
            maintenance: input.maintenance,
            rent_total: ledger::rent_total(prior_total, input.rent, input.maintenance),
        };
        self.ledger
            .upsert_rental_details(allotment_id, &draft, self.clock.now())
            .await
    }
}

// ── GetRentalDetails ─────────────────────────────────────────────────────────

pub struct GetRentalDetailsUseCase<L: LedgerRepository> {
    pub ledger: L,
}

impl<L: LedgerRepository> GetRentalDetailsUseCase<L> {
    pub async fn execute(&self, allotment_id: i64) -> Result<RentalDetails, RentalsServiceError> {
        self.ledger
            .find_rental_details(allotment_id)
            .await?
            .ok_or(RentalsServiceError::RentalDetailsNotFound)
    }
}

// ── ListRentalDetailsByPerson ────────────────────────────────────────────────

pub struct ListRentalDetailsByPersonUseCase<L: LedgerRepository> {
    pub ledger: L,
}

impl<L: LedgerRepository> ListRentalDetailsByPersonUseCase<L> {
    pub async fn execute(&self, person_id: i64) -> Result<Vec<RentalDetails>, RentalsServiceError> {
        self.ledger.list_rental_details_by_person(person_id).await
    }
}

// ── CreateTransaction ────────────────────────────────────────────────────────

const TNX_RETRY_ATTEMPTS: u32 = 3;

pub struct CreateTransactionUseCase<A, R, L, S, O>
where
    A: AllotmentRepository,
    R: RoomRepository,
    L: LedgerRepository,
    S: ReceiptStore,
    O: OutboxRepository,
{
    pub allotments: A,
    pub rooms: R,
    pub ledger: L,
    pub receipts: S,
    pub outbox: O,
    pub clock: Arc<dyn Clock>,
}

impl<A, R, L, S, O> CreateTransactionUseCase<A, R, L, S, O>
where
    A: AllotmentRepository,
    R: RoomRepository,
    L: LedgerRepository,
    S: ReceiptStore,
    O: OutboxRepository,
{
    pub async fn execute(
        &self,
        allotment_id: i64,
        input: NewTransaction,
    ) -> Result<RentTransaction, RentalsServiceError> {
        if input.amount < 0 {
            return Err(RentalsServiceError::NegativeAmount);
        }
        let allotment = self
            .allotments
            .find_by_id(allotment_id)
            .await?
            .ok_or(RentalsServiceError::AllotmentNotFound)?;
        let room = self
            .rooms
            .find_by_id(allotment.room_id)
            .await?
            .ok_or(RentalsServiceError::RoomNotFound)?;

        // The generated number is probabilistically unique; on a constraint
        // collision regenerate with a fresh suffix, bounded.
        let mut tnx = None;
        for attempt in 0..TNX_RETRY_ATTEMPTS {
            let now = self.clock.now();
            let draft = TransactionDraft {
                tnx_no: txn::transaction_number(now, &room.building, room.room_no),
                allotment_id,
                amount: input.amount,
                is_rent: input.is_rent,
                payment_mode: input.payment_mode,
                comment: input.comment.clone(),
                ts: now,
            };
            match self.ledger.create_transaction(&draft).await {
                Ok(stored) => {
                    tnx = Some(stored);
                    break;
                }
                Err(RentalsServiceError::TxnNumberCollision)
                    if attempt + 1 < TNX_RETRY_ATTEMPTS =>
                {
                    tracing::warn!(attempt, "transaction number collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }
        let mut tnx = tnx.ok_or(RentalsServiceError::TxnNumberCollision)?;

        // Receipt generation and path attachment are a second, non-atomic
        // step. A failure leaves the transaction without a receipt path.
        match self.receipts.write(&tnx).await {
            Ok(path) => match self.ledger.attach_receipt(tnx.id, &path).await {
                Ok(()) => tnx.receipt = Some(path),
                Err(e) => {
                    tracing::warn!(error = %e, tnx_no = %tnx.tnx_no, "failed to attach receipt path")
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, tnx_no = %tnx.tnx_no, "failed to write receipt")
            }
        }

        let event = NewOutboxEvent {
            kind: "payment.recorded".to_owned(),
            payload: serde_json::json!({
                "tnx_no": tnx.tnx_no,
                "allotment_id": allotment_id,
                "person_id": allotment.person_id,
                "amount": tnx.amount,
                "payment_mode": tnx.payment_mode.as_str(),
                "receipt": tnx.receipt,
                "ts": tnx.ts.to_rfc3339(),
            }),
            idempotency_key: format!("payment.recorded:{}", tnx.tnx_no),
        };
        if let Err(e) = self.outbox.enqueue(&event).await {
            tracing::warn!(error = %e, tnx_no = %tnx.tnx_no, "failed to enqueue payment notice");
        }
        Ok(tnx)
    }
}

// ── ListTransactions ─────────────────────────────────────────────────────────

pub struct ListTransactionsUseCase<A: AllotmentRepository, L: LedgerRepository> {
    pub allotments: A,
    pub ledger: L,
}

impl<A: AllotmentRepository, L: LedgerRepository> ListTransactionsUseCase<A, L> {
    pub async fn execute(
        &self,
        allotment_id: i64,
        sort: Sort,
    ) -> Result<Vec<RentTransaction>, RentalsServiceError> {
        if self.allotments.find_by_id(allotment_id).await?.is_none() {
            return Err(RentalsServiceError::AllotmentNotFound);
        }
        self.ledger.list_by_allotment(allotment_id, sort).await
    }
}

// ── ListTransactionsByPerson ─────────────────────────────────────────────────

pub struct ListTransactionsByPersonUseCase<L: LedgerRepository> {
    pub ledger: L,
}

impl<L: LedgerRepository> ListTransactionsByPersonUseCase<L> {
    pub async fn execute(
        &self,
        person_id: i64,
    ) -> Result<Vec<RentTransaction>, RentalsServiceError> {
        self.ledger.list_by_person(person_id).await
    }
}
