use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use rentman_domain::clock::{Clock, FixedClock};
use rentman_domain::pagination::Sort;
use rentman_domain::types::Role;

use rentman_rentals::domain::repository::{
    AllotmentRepository, LedgerRepository, OutboxRepository, PersonRepository, ReceiptStore,
    RoomRepository,
};
use rentman_rentals::domain::types::{
    Allotment, AllotmentExtra, ExtraPatch, MeterDetails, MeterInput, NewOutboxEvent, NewPerson,
    Person, PersonPatch, RentTransaction, RentalDetails, RentalDetailsDraft, Room, RoomDraft,
    TransactionDraft,
};
use rentman_rentals::error::RentalsServiceError;

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap(),
    ))
}

pub fn test_person(id: i64) -> Person {
    Person {
        id,
        username: format!("tenant{id}"),
        first_name: "Ramesh".into(),
        middle_name: None,
        last_name: "Patil".into(),
        email: None,
        role: Role::Tenant,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn test_room(id: i64, room_no: i32, building: &str) -> Room {
    Room {
        id,
        room_no,
        floor_no: (room_no / 100) as i16,
        address: None,
        building: building.to_owned(),
        room_code: format!("{room_no}_{building}"),
        code_name: format!("{room_no}-{building}"),
        area: None,
        layout: None,
    }
}

// ── MockPersonRepo ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockPersonRepo {
    pub persons: Arc<Mutex<Vec<Person>>>,
}

impl MockPersonRepo {
    pub fn new(persons: Vec<Person>) -> Self {
        Self {
            persons: Arc::new(Mutex::new(persons)),
        }
    }
}

impl PersonRepository for MockPersonRepo {
    async fn create(
        &self,
        person: &NewPerson,
        created_at: DateTime<Utc>,
    ) -> Result<Person, RentalsServiceError> {
        let mut persons = self.persons.lock().unwrap();
        let stored = Person {
            id: persons.len() as i64 + 1,
            username: person.username.clone(),
            first_name: person.first_name.clone(),
            middle_name: person.middle_name.clone(),
            last_name: person.last_name.clone(),
            email: person.email.clone(),
            role: person.role,
            created_at,
        };
        persons.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Person>, RentalsServiceError> {
        Ok(self
            .persons
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Person>, RentalsServiceError> {
        Ok(self.persons.lock().unwrap().clone())
    }

    async fn update(&self, _id: i64, _patch: &PersonPatch) -> Result<(), RentalsServiceError> {
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, RentalsServiceError> {
        let mut persons = self.persons.lock().unwrap();
        let before = persons.len();
        persons.retain(|p| p.id != id);
        Ok(persons.len() < before)
    }
}

// ── MockRoomRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockRoomRepo {
    pub rooms: Arc<Mutex<Vec<Room>>>,
}

impl MockRoomRepo {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms: Arc::new(Mutex::new(rooms)),
        }
    }
}

impl RoomRepository for MockRoomRepo {
    async fn create(&self, draft: &RoomDraft) -> Result<Room, RentalsServiceError> {
        let mut rooms = self.rooms.lock().unwrap();
        let stored = Room {
            id: rooms.len() as i64 + 1,
            room_no: draft.room_no,
            floor_no: draft.floor_no,
            address: draft.address.clone(),
            building: draft.building.clone(),
            room_code: draft.room_code.clone(),
            code_name: draft.code_name.clone(),
            area: draft.area,
            layout: draft.layout,
        };
        rooms.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, RentalsServiceError> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list(&self, building: Option<&str>) -> Result<Vec<Room>, RentalsServiceError> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .filter(|r| building.is_none_or(|b| r.building == b))
            .cloned()
            .collect())
    }

    async fn update(&self, _id: i64, _draft: &RoomDraft) -> Result<(), RentalsServiceError> {
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, RentalsServiceError> {
        let mut rooms = self.rooms.lock().unwrap();
        let before = rooms.len();
        rooms.retain(|r| r.id != id);
        Ok(rooms.len() < before)
    }

    async fn upsert_meter(
        &self,
        room_id: i64,
        input: &MeterInput,
    ) -> Result<MeterDetails, RentalsServiceError> {
        Ok(MeterDetails {
            id: 1,
            room_id,
            meter_no: input.meter_no.clone(),
            bu_code: input.bu_code,
            consumer_type: input.consumer_type.clone(),
        })
    }

    async fn find_meter(&self, _room_id: i64) -> Result<Option<MeterDetails>, RentalsServiceError> {
        Ok(None)
    }
}

// ── MockAllotmentRepo ────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAllotmentRepo {
    pub allotments: Arc<Mutex<Vec<Allotment>>>,
    pub extras: Arc<Mutex<Vec<AllotmentExtra>>>,
}

impl AllotmentRepository for MockAllotmentRepo {
    async fn create_active(
        &self,
        person_id: i64,
        room_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        ts: DateTime<Utc>,
    ) -> Result<Allotment, RentalsServiceError> {
        let mut allotments = self.allotments.lock().unwrap();
        if allotments.iter().any(|a| a.room_id == room_id && a.is_active) {
            return Err(RentalsServiceError::RoomOccupied);
        }
        let allotment = Allotment {
            id: allotments.len() as i64 + 1,
            person_id,
            room_id,
            start_date,
            end_date,
            actual_end_date: None,
            is_active: true,
            ts,
        };
        allotments.push(allotment.clone());
        let mut extras = self.extras.lock().unwrap();
        if !extras.iter().any(|e| e.allotment_id == allotment.id) {
            let next_id = extras.len() as i64 + 1;
            extras.push(AllotmentExtra {
                id: next_id,
                allotment_id: allotment.id,
                agg_available: false,
                is_painted: false,
                is_water_tank: false,
                is_grill: false,
                is_ele_bill_clear: false,
                ts,
            });
        }
        Ok(allotment)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Allotment>, RentalsServiceError> {
        Ok(self
            .allotments
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_by_person(&self, person_id: i64) -> Result<Vec<Allotment>, RentalsServiceError> {
        Ok(self
            .allotments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.person_id == person_id)
            .cloned()
            .collect())
    }

    async fn terminate(
        &self,
        id: i64,
        actual_end_date: NaiveDate,
    ) -> Result<Allotment, RentalsServiceError> {
        let mut allotments = self.allotments.lock().unwrap();
        let allotment = allotments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(RentalsServiceError::AllotmentNotFound)?;
        if !allotment.is_active {
            return Err(RentalsServiceError::AlreadyDeallotted);
        }
        allotment.is_active = false;
        allotment.actual_end_date = Some(actual_end_date);
        Ok(allotment.clone())
    }

    async fn find_extra(
        &self,
        allotment_id: i64,
    ) -> Result<Option<AllotmentExtra>, RentalsServiceError> {
        Ok(self
            .extras
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.allotment_id == allotment_id)
            .cloned())
    }

    async fn update_extra(
        &self,
        allotment_id: i64,
        patch: &ExtraPatch,
    ) -> Result<AllotmentExtra, RentalsServiceError> {
        let mut extras = self.extras.lock().unwrap();
        let extra = extras
            .iter_mut()
            .find(|e| e.allotment_id == allotment_id)
            .ok_or(RentalsServiceError::AllotmentNotFound)?;
        if let Some(v) = patch.agg_available {
            extra.agg_available = v;
        }
        if let Some(v) = patch.is_painted {
            extra.is_painted = v;
        }
        if let Some(v) = patch.is_water_tank {
            extra.is_water_tank = v;
        }
        if let Some(v) = patch.is_grill {
            extra.is_grill = v;
        }
        if let Some(v) = patch.is_ele_bill_clear {
            extra.is_ele_bill_clear = v;
        }
        Ok(extra.clone())
    }

    async fn active_room_ids(&self) -> Result<Vec<i64>, RentalsServiceError> {
        Ok(self
            .allotments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.is_active)
            .map(|a| a.room_id)
            .collect())
    }
}

// ── MockLedgerRepo ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockLedgerRepo {
    pub transactions: Arc<Mutex<Vec<RentTransaction>>>,
    pub details: Arc<Mutex<Vec<RentalDetails>>>,
    /// Number of upcoming inserts that fail with a tnx_no collision.
    pub collisions_remaining: Arc<Mutex<u32>>,
}

impl MockLedgerRepo {
    pub fn with_collisions(n: u32) -> Self {
        Self {
            collisions_remaining: Arc::new(Mutex::new(n)),
            ..Default::default()
        }
    }
}

impl LedgerRepository for MockLedgerRepo {
    async fn upsert_rental_details(
        &self,
        allotment_id: i64,
        draft: &RentalDetailsDraft,
        ts: DateTime<Utc>,
    ) -> Result<RentalDetails, RentalsServiceError> {
        let mut details = self.details.lock().unwrap();
        if let Some(existing) = details.iter_mut().find(|d| d.allotment_id == allotment_id) {
            existing.deposit = draft.deposit;
            existing.rent = draft.rent;
            existing.maintenance = draft.maintenance;
            existing.rent_total = draft.rent_total;
            return Ok(existing.clone());
        }
        let stored = RentalDetails {
            id: details.len() as i64 + 1,
            allotment_id,
            deposit: draft.deposit,
            rent: draft.rent,
            maintenance: draft.maintenance,
            rent_total: draft.rent_total,
            ts,
        };
        details.push(stored.clone());
        Ok(stored)
    }

    async fn find_rental_details(
        &self,
        allotment_id: i64,
    ) -> Result<Option<RentalDetails>, RentalsServiceError> {
        Ok(self
            .details
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.allotment_id == allotment_id)
            .cloned())
    }

    async fn list_rental_details_by_person(
        &self,
        _person_id: i64,
    ) -> Result<Vec<RentalDetails>, RentalsServiceError> {
        Ok(self.details.lock().unwrap().clone())
    }

    async fn create_transaction(
        &self,
        draft: &TransactionDraft,
    ) -> Result<RentTransaction, RentalsServiceError> {
        {
            let mut remaining = self.collisions_remaining.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                return Err(RentalsServiceError::TxnNumberCollision);
            }
        }
        let mut transactions = self.transactions.lock().unwrap();
        if transactions.iter().any(|t| t.tnx_no == draft.tnx_no) {
            return Err(RentalsServiceError::TxnNumberCollision);
        }
        let stored = RentTransaction {
            id: transactions.len() as i64 + 1,
            tnx_no: draft.tnx_no.clone(),
            allotment_id: draft.allotment_id,
            amount: draft.amount,
            is_rent: draft.is_rent,
            payment_mode: draft.payment_mode,
            comment: draft.comment.clone(),
            receipt: None,
            ts: draft.ts,
        };
        transactions.push(stored.clone());
        Ok(stored)
    }

    async fn attach_receipt(&self, id: i64, path: &str) -> Result<(), RentalsServiceError> {
        let mut transactions = self.transactions.lock().unwrap();
        if let Some(tnx) = transactions.iter_mut().find(|t| t.id == id) {
            tnx.receipt = Some(path.to_owned());
        }
        Ok(())
    }

    async fn list_by_allotment(
        &self,
        allotment_id: i64,
        sort: Sort,
    ) -> Result<Vec<RentTransaction>, RentalsServiceError> {
        let mut rows: Vec<RentTransaction> = self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.allotment_id == allotment_id)
            .cloned()
            .collect();
        match sort {
            Sort::Asc => rows.sort_by_key(|t| (t.ts, t.id)),
            Sort::Desc => rows.sort_by_key(|t| std::cmp::Reverse((t.ts, t.id))),
        }
        Ok(rows)
    }

    async fn list_by_person(
        &self,
        _person_id: i64,
    ) -> Result<Vec<RentTransaction>, RentalsServiceError> {
        Ok(self.transactions.lock().unwrap().clone())
    }
}

// ── MockOutboxRepo ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockOutboxRepo {
    pub events: Arc<Mutex<Vec<NewOutboxEvent>>>,
    pub fail: bool,
}

impl MockOutboxRepo {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl OutboxRepository for MockOutboxRepo {
    async fn enqueue(&self, event: &NewOutboxEvent) -> Result<(), RentalsServiceError> {
        if self.fail {
            return Err(anyhow::anyhow!("outbox unavailable").into());
        }
        let mut events = self.events.lock().unwrap();
        if events
            .iter()
            .any(|e| e.idempotency_key == event.idempotency_key)
        {
            return Ok(());
        }
        events.push(event.clone());
        Ok(())
    }

    async fn due(
        &self,
        _now: DateTime<Utc>,
        _limit: u64,
    ) -> Result<Vec<rentman_rentals::domain::types::OutboxEvent>, RentalsServiceError> {
        Ok(vec![])
    }

    async fn mark_processed(
        &self,
        _id: uuid::Uuid,
        _now: DateTime<Utc>,
    ) -> Result<(), RentalsServiceError> {
        Ok(())
    }

    async fn mark_failed(
        &self,
        _id: uuid::Uuid,
        _error: &str,
        _now: DateTime<Utc>,
        _next_attempt_at: Option<DateTime<Utc>>,
    ) -> Result<(), RentalsServiceError> {
        Ok(())
    }
}

// ── MockReceiptStore ─────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockReceiptStore {
    pub written: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl MockReceiptStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl ReceiptStore for MockReceiptStore {
    async fn write(&self, tnx: &RentTransaction) -> Result<String, RentalsServiceError> {
        if self.fail {
            return Err(anyhow::anyhow!("receipt store unavailable").into());
        }
        let path = format!("receipts/html/{}.html", tnx.tnx_no);
        self.written.lock().unwrap().push(path.clone());
        Ok(path)
    }
}
