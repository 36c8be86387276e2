use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use rentman_domain::types::{NoticeType, PaymentMode, Role, RoomLayout};

// ── Persons ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPerson {
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, Default)]
pub struct PersonPatch {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl PersonPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.middle_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.role.is_none()
    }
}

// ── Profile (1:1 with person) ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub person_id: i64,
    pub phone: String,
    pub alt_phone: Option<String>,
    pub whatsapp: String,
}

#[derive(Debug, Clone)]
pub struct ContactInput {
    pub phone: String,
    pub alt_phone: Option<String>,
    pub whatsapp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: i64,
    pub person_id: i64,
    pub old_address: String,
    pub state: String,
    pub city: String,
    pub pin_code: String,
}

#[derive(Debug, Clone)]
pub struct AddressInput {
    pub old_address: String,
    pub state: String,
    pub city: String,
    pub pin_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Docs {
    pub id: i64,
    pub person_id: i64,
    pub aadhaar_no: String,
    pub aadhaar_doc: Option<String>,
    pub pan_no: String,
    pub pan_doc: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DocsInput {
    pub aadhaar_no: String,
    pub aadhaar_doc: Option<String>,
    pub pan_no: String,
    pub pan_doc: Option<String>,
}

// ── Rooms ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: i64,
    pub room_no: i32,
    pub floor_no: i16,
    pub address: Option<String>,
    pub building: String,
    pub room_code: String,
    pub code_name: String,
    pub area: Option<i32>,
    pub layout: Option<RoomLayout>,
}

/// Room fields ready for persistence. Derived columns (`room_code`,
/// `code_name`, auto address) are computed in the usecase before this is
/// built.
#[derive(Debug, Clone)]
pub struct RoomDraft {
    pub room_no: i32,
    pub floor_no: i16,
    pub address: Option<String>,
    pub building: String,
    pub room_code: String,
    pub code_name: String,
    pub area: Option<i32>,
    pub layout: Option<RoomLayout>,
}

#[derive(Debug, Clone)]
pub struct NewRoom {
    pub room_no: i32,
    pub floor_no: i16,
    pub address: Option<String>,
    pub building: String,
    pub area: Option<i32>,
    pub layout: Option<RoomLayout>,
}

/// Partial room update. `address` is doubly optional: the outer `None`
/// leaves the stored address untouched, `Some(None)` clears it so it is
/// re-derived from the building template.
#[derive(Debug, Clone, Default)]
pub struct RoomPatch {
    pub room_no: Option<i32>,
    pub floor_no: Option<i16>,
    pub address: Option<Option<String>>,
    pub building: Option<String>,
    pub area: Option<i32>,
    pub layout: Option<RoomLayout>,
}

impl RoomPatch {
    pub fn is_empty(&self) -> bool {
        self.room_no.is_none()
            && self.floor_no.is_none()
            && self.address.is_none()
            && self.building.is_none()
            && self.area.is_none()
            && self.layout.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterDetails {
    pub id: i64,
    pub room_id: i64,
    pub meter_no: String,
    pub bu_code: i16,
    pub consumer_type: String,
}

#[derive(Debug, Clone)]
pub struct MeterInput {
    pub meter_no: String,
    pub bu_code: i16,
    pub consumer_type: String,
}

/// Per-building occupancy counts, computed per request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BuildingStats {
    pub building: String,
    pub total_rooms: u64,
    pub occupied_rooms: u64,
    pub vacant_rooms: u64,
}

/// Per-layout occupancy counts, computed per request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LayoutStats {
    pub layout: String,
    pub total_rooms: u64,
    pub occupied_rooms: u64,
    pub vacant_rooms: u64,
}

// ── Allotments ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allotment {
    pub id: i64,
    pub person_id: i64,
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub ts: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAllotment {
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllotmentExtra {
    pub id: i64,
    pub allotment_id: i64,
    pub agg_available: bool,
    pub is_painted: bool,
    pub is_water_tank: bool,
    pub is_grill: bool,
    pub is_ele_bill_clear: bool,
    pub ts: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ExtraPatch {
    pub agg_available: Option<bool>,
    pub is_painted: Option<bool>,
    pub is_water_tank: Option<bool>,
    pub is_grill: Option<bool>,
    pub is_ele_bill_clear: Option<bool>,
}

impl ExtraPatch {
    pub fn is_empty(&self) -> bool {
        self.agg_available.is_none()
            && self.is_painted.is_none()
            && self.is_water_tank.is_none()
            && self.is_grill.is_none()
            && self.is_ele_bill_clear.is_none()
    }
}

// ── Ledger ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalDetails {
    pub id: i64,
    pub allotment_id: i64,
    pub deposit: i64,
    pub rent: i64,
    pub maintenance: i64,
    pub rent_total: i64,
    pub ts: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RentalDetailsDraft {
    pub deposit: i64,
    pub rent: i64,
    pub maintenance: i64,
    pub rent_total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentTransaction {
    pub id: i64,
    pub tnx_no: String,
    pub allotment_id: i64,
    pub amount: i64,
    pub is_rent: bool,
    pub payment_mode: PaymentMode,
    pub comment: Option<String>,
    pub receipt: Option<String>,
    pub ts: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: i64,
    pub is_rent: bool,
    pub payment_mode: PaymentMode,
    pub comment: Option<String>,
}

/// Transaction row ready for insert, tnx_no already stamped.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub tnx_no: String,
    pub allotment_id: i64,
    pub amount: i64,
    pub is_rent: bool,
    pub payment_mode: PaymentMode,
    pub comment: Option<String>,
    pub ts: DateTime<Utc>,
}

// ── Notices ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: i64,
    pub allotment_id: i64,
    pub code: NoticeType,
    pub description: Option<String>,
    pub ts: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNotice {
    pub code: NoticeType,
    pub description: Option<String>,
}

// ── Outbox ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct OutboxEvent {
    pub id: Uuid,
    pub kind: String,
    pub payload: serde_json::Value,
    pub idempotency_key: String,
    pub attempts: i32,
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub next_attempt_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewOutboxEvent {
    pub kind: String,
    pub payload: serde_json::Value,
    pub idempotency_key: String,
}
