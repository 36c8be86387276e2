use anyhow::Context as _;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
    TransactionError, TransactionTrait, sea_query::Expr, sea_query::Query,
};
use uuid::Uuid;

use rentman_domain::pagination::Sort;
use rentman_domain::types::{NoticeType, PaymentMode, Role, RoomLayout};
use rentman_rentals_schema::{
    addresses, contacts, docs, meter_details, notices, outbox_events, persons, rent_transactions,
    rental_details, room_allotment_extras, room_allotments, rooms,
};

use crate::domain::repository::{
    AllotmentRepository, LedgerRepository, NoticeRepository, OutboxRepository, PersonRepository,
    ProfileRepository, RoomRepository,
};
use crate::domain::types::{
    Address, AddressInput, Allotment, AllotmentExtra, Contact, ContactInput, Docs, DocsInput,
    ExtraPatch, MeterDetails, MeterInput, NewOutboxEvent, NewPerson, Notice, OutboxEvent, Person,
    PersonPatch, RentTransaction, RentalDetails, RentalDetailsDraft, Room, RoomDraft,
    TransactionDraft,
};
use crate::error::RentalsServiceError;

fn unwrap_txn_err(e: TransactionError<RentalsServiceError>) -> RentalsServiceError {
    match e {
        TransactionError::Connection(e) => e.into(),
        TransactionError::Transaction(e) => e,
    }
}

// ── Person repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPersonRepository {
    pub db: DatabaseConnection,
}

impl PersonRepository for DbPersonRepository {
    async fn create(
        &self,
        person: &NewPerson,
        created_at: DateTime<Utc>,
    ) -> Result<Person, RentalsServiceError> {
        let model = persons::ActiveModel {
            username: Set(person.username.clone()),
            first_name: Set(person.first_name.clone()),
            middle_name: Set(person.middle_name.clone()),
            last_name: Set(person.last_name.clone()),
            email: Set(person.email.clone()),
            role: Set(person.role.as_str().to_owned()),
            created_at: Set(created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => RentalsServiceError::PersonAlreadyExists,
            _ => anyhow::Error::new(e).context("create person").into(),
        })?;
        Ok(person_from_model(model))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Person>, RentalsServiceError> {
        let model = persons::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find person by id")?;
        Ok(model.map(person_from_model))
    }

    async fn list(&self) -> Result<Vec<Person>, RentalsServiceError> {
        let models = persons::Entity::find()
            .order_by_asc(persons::Column::Id)
            .all(&self.db)
            .await
            .context("list persons")?;
        Ok(models.into_iter().map(person_from_model).collect())
    }

    async fn update(&self, id: i64, patch: &PersonPatch) -> Result<(), RentalsServiceError> {
        let mut am = persons::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref first_name) = patch.first_name {
            am.first_name = Set(first_name.clone());
        }
        if let Some(ref middle_name) = patch.middle_name {
            am.middle_name = Set(Some(middle_name.clone()));
        }
        if let Some(ref last_name) = patch.last_name {
            am.last_name = Set(last_name.clone());
        }
        if let Some(ref email) = patch.email {
            am.email = Set(Some(email.clone()));
        }
        if let Some(role) = patch.role {
            am.role = Set(role.as_str().to_owned());
        }
        am.update(&self.db).await.context("update person")?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, RentalsServiceError> {
        let result = persons::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete person")?;
        Ok(result.rows_affected > 0)
    }
}

fn person_from_model(model: persons::Model) -> Person {
    Person {
        id: model.id,
        username: model.username,
        first_name: model.first_name,
        middle_name: model.middle_name,
        last_name: model.last_name,
        email: model.email,
        role: Role::parse(&model.role).unwrap_or_default(),
        created_at: model.created_at,
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn upsert_contact(
        &self,
        person_id: i64,
        input: &ContactInput,
    ) -> Result<Contact, RentalsServiceError> {
        let existing = contacts::Entity::find()
            .filter(contacts::Column::PersonId.eq(person_id))
            .one(&self.db)
            .await
            .context("find contact for upsert")?;

        let model = match existing {
            Some(row) => {
                let mut contact = row.into_active_model();
                contact.phone = Set(input.phone.clone());
                contact.alt_phone = Set(input.alt_phone.clone());
                contact.whatsapp = Set(input.whatsapp.clone());
                contact.update(&self.db).await.context("update contact")?
            }
            None => {
                contacts::ActiveModel {
                    person_id: Set(person_id),
                    phone: Set(input.phone.clone()),
                    alt_phone: Set(input.alt_phone.clone()),
                    whatsapp: Set(input.whatsapp.clone()),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .context("insert contact")?
            }
        };
        Ok(contact_from_model(model))
    }

    async fn find_contact(&self, person_id: i64) -> Result<Option<Contact>, RentalsServiceError> {
        let model = contacts::Entity::find()
            .filter(contacts::Column::PersonId.eq(person_id))
            .one(&self.db)
            .await
            .context("find contact")?;
        Ok(model.map(contact_from_model))
    }

    async fn upsert_address(
        &self,
        person_id: i64,
        input: &AddressInput,
    ) -> Result<Address, RentalsServiceError> {
        let existing = addresses::Entity::find()
            .filter(addresses::Column::PersonId.eq(person_id))
            .one(&self.db)
            .await
            .context("find address for upsert")?;

        let model = match existing {
            Some(row) => {
                let mut address = row.into_active_model();
                address.old_address = Set(input.old_address.clone());
                address.state = Set(input.state.clone());
                address.city = Set(input.city.clone());
                address.pin_code = Set(input.pin_code.clone());
                address.update(&self.db).await.context("update address")?
            }
            None => {
                addresses::ActiveModel {
                    person_id: Set(person_id),
                    old_address: Set(input.old_address.clone()),
                    state: Set(input.state.clone()),
                    city: Set(input.city.clone()),
                    pin_code: Set(input.pin_code.clone()),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .context("insert address")?
            }
        };
        Ok(address_from_model(model))
    }

    async fn find_address(&self, person_id: i64) -> Result<Option<Address>, RentalsServiceError> {
        let model = addresses::Entity::find()
            .filter(addresses::Column::PersonId.eq(person_id))
            .one(&self.db)
            .await
            .context("find address")?;
        Ok(model.map(address_from_model))
    }

    async fn upsert_docs(
        &self,
        person_id: i64,
        input: &DocsInput,
    ) -> Result<Docs, RentalsServiceError> {
        let existing = docs::Entity::find()
            .filter(docs::Column::PersonId.eq(person_id))
            .one(&self.db)
            .await
            .context("find docs for upsert")?;

        let model = match existing {
            Some(row) => {
                let mut doc = row.into_active_model();
                doc.aadhaar_no = Set(input.aadhaar_no.clone());
                doc.aadhaar_doc = Set(input.aadhaar_doc.clone());
                doc.pan_no = Set(input.pan_no.clone());
                doc.pan_doc = Set(input.pan_doc.clone());
                doc.update(&self.db).await.context("update docs")?
            }
            None => {
                docs::ActiveModel {
                    person_id: Set(person_id),
                    aadhaar_no: Set(input.aadhaar_no.clone()),
                    aadhaar_doc: Set(input.aadhaar_doc.clone()),
                    pan_no: Set(input.pan_no.clone()),
                    pan_doc: Set(input.pan_doc.clone()),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .context("insert docs")?
            }
        };
        Ok(docs_from_model(model))
    }

    async fn find_docs(&self, person_id: i64) -> Result<Option<Docs>, RentalsServiceError> {
        let model = docs::Entity::find()
            .filter(docs::Column::PersonId.eq(person_id))
            .one(&self.db)
            .await
            .context("find docs")?;
        Ok(model.map(docs_from_model))
    }
}

fn contact_from_model(model: contacts::Model) -> Contact {
    Contact {
        id: model.id,
        person_id: model.person_id,
        phone: model.phone,
        alt_phone: model.alt_phone,
        whatsapp: model.whatsapp,
    }
}

fn address_from_model(model: addresses::Model) -> Address {
    Address {
        id: model.id,
        person_id: model.person_id,
        old_address: model.old_address,
        state: model.state,
        city: model.city,
        pin_code: model.pin_code,
    }
}

fn docs_from_model(model: docs::Model) -> Docs {
    Docs {
        id: model.id,
        person_id: model.person_id,
        aadhaar_no: model.aadhaar_no,
        aadhaar_doc: model.aadhaar_doc,
        pan_no: model.pan_no,
        pan_doc: model.pan_doc,
    }
}

// ── Room repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoomRepository {
    pub db: DatabaseConnection,
}

impl RoomRepository for DbRoomRepository {
    async fn create(&self, draft: &RoomDraft) -> Result<Room, RentalsServiceError> {
        let model = room_active_model(draft)
            .insert(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    RentalsServiceError::DuplicateRoomCode
                }
                _ => anyhow::Error::new(e).context("create room").into(),
            })?;
        Ok(room_from_model(model))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, RentalsServiceError> {
        let model = rooms::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find room by id")?;
        Ok(model.map(room_from_model))
    }

    async fn list(&self, building: Option<&str>) -> Result<Vec<Room>, RentalsServiceError> {
        let mut query = rooms::Entity::find().order_by_asc(rooms::Column::Id);
        if let Some(building) = building {
            query = query.filter(rooms::Column::Building.eq(building));
        }
        let models = query.all(&self.db).await.context("list rooms")?;
        Ok(models.into_iter().map(room_from_model).collect())
    }

    async fn update(&self, id: i64, draft: &RoomDraft) -> Result<(), RentalsServiceError> {
        let mut am = room_active_model(draft);
        am.id = Set(id);
        am.update(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => RentalsServiceError::DuplicateRoomCode,
            _ => anyhow::Error::new(e).context("update room").into(),
        })?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, RentalsServiceError> {
        let result = rooms::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete room")?;
        Ok(result.rows_affected > 0)
    }

    async fn upsert_meter(
        &self,
        room_id: i64,
        input: &MeterInput,
    ) -> Result<MeterDetails, RentalsServiceError> {
        let existing = meter_details::Entity::find()
            .filter(meter_details::Column::RoomId.eq(room_id))
            .one(&self.db)
            .await
            .context("find meter for upsert")?;

        let model = match existing {
            Some(row) => {
                let mut meter = row.into_active_model();
                meter.meter_no = Set(input.meter_no.clone());
                meter.bu_code = Set(input.bu_code);
                meter.consumer_type = Set(input.consumer_type.clone());
                meter.update(&self.db).await.context("update meter")?
            }
            None => {
                meter_details::ActiveModel {
                    room_id: Set(room_id),
                    meter_no: Set(input.meter_no.clone()),
                    bu_code: Set(input.bu_code),
                    consumer_type: Set(input.consumer_type.clone()),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .context("insert meter")?
            }
        };
        Ok(meter_from_model(model))
    }

    async fn find_meter(&self, room_id: i64) -> Result<Option<MeterDetails>, RentalsServiceError> {
        let model = meter_details::Entity::find()
            .filter(meter_details::Column::RoomId.eq(room_id))
            .one(&self.db)
            .await
            .context("find meter")?;
        Ok(model.map(meter_from_model))
    }
}

fn room_active_model(draft: &RoomDraft) -> rooms::ActiveModel {
    rooms::ActiveModel {
        room_no: Set(draft.room_no),
        floor_no: Set(draft.floor_no),
        address: Set(draft.address.clone()),
        building: Set(draft.building.clone()),
        room_code: Set(draft.room_code.clone()),
        code_name: Set(draft.code_name.clone()),
        area: Set(draft.area),
        layout: Set(draft.layout.map(|l| l.as_str().to_owned())),
        ..Default::default()
    }
}

fn room_from_model(model: rooms::Model) -> Room {
    Room {
        id: model.id,
        room_no: model.room_no,
        floor_no: model.floor_no,
        address: model.address,
        building: model.building,
        room_code: model.room_code,
        code_name: model.code_name,
        area: model.area,
        layout: model.layout.as_deref().and_then(RoomLayout::parse),
    }
}

fn meter_from_model(model: meter_details::Model) -> MeterDetails {
    MeterDetails {
        id: model.id,
        room_id: model.room_id,
        meter_no: model.meter_no,
        bu_code: model.bu_code,
        consumer_type: model.consumer_type,
    }
}

// ── Allotment repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAllotmentRepository {
    pub db: DatabaseConnection,
}

impl AllotmentRepository for DbAllotmentRepository {
    async fn create_active(
        &self,
        person_id: i64,
        room_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        ts: DateTime<Utc>,
    ) -> Result<Allotment, RentalsServiceError> {
        self.db
            .transaction::<_, Allotment, RentalsServiceError>(|txn| {
                Box::pin(async move {
                    // Lock the room row so the active-allotment check and
                    // the insert are one atomic unit.
                    rooms::Entity::find_by_id(room_id)
                        .lock_exclusive()
                        .one(txn)
                        .await?
                        .ok_or(RentalsServiceError::RoomNotFound)?;

                    let active = room_allotments::Entity::find()
                        .filter(room_allotments::Column::RoomId.eq(room_id))
                        .filter(room_allotments::Column::IsActive.eq(true))
                        .count(txn)
                        .await?;
                    if active > 0 {
                        return Err(RentalsServiceError::RoomOccupied);
                    }

                    let model = room_allotments::ActiveModel {
                        person_id: Set(person_id),
                        room_id: Set(room_id),
                        start_date: Set(start_date),
                        end_date: Set(end_date),
                        actual_end_date: Set(None),
                        is_active: Set(true),
                        ts: Set(ts),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    let existing = room_allotment_extras::Entity::find()
                        .filter(room_allotment_extras::Column::AllotmentId.eq(model.id))
                        .one(txn)
                        .await?;
                    if existing.is_none() {
                        room_allotment_extras::ActiveModel {
                            allotment_id: Set(model.id),
                            agg_available: Set(false),
                            is_painted: Set(false),
                            is_water_tank: Set(false),
                            is_grill: Set(false),
                            is_ele_bill_clear: Set(false),
                            ts: Set(ts),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await?;
                    }

                    Ok(allotment_from_model(model))
                })
            })
            .await
            .map_err(unwrap_txn_err)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Allotment>, RentalsServiceError> {
        let model = room_allotments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find allotment by id")?;
        Ok(model.map(allotment_from_model))
    }

    async fn list_by_person(
        &self,
        person_id: i64,
    ) -> Result<Vec<Allotment>, RentalsServiceError> {
        let models = room_allotments::Entity::find()
            .filter(room_allotments::Column::PersonId.eq(person_id))
            .order_by_desc(room_allotments::Column::Ts)
            .all(&self.db)
            .await
            .context("list allotments by person")?;
        Ok(models.into_iter().map(allotment_from_model).collect())
    }

    async fn terminate(
        &self,
        id: i64,
        actual_end_date: NaiveDate,
    ) -> Result<Allotment, RentalsServiceError> {
        self.db
            .transaction::<_, Allotment, RentalsServiceError>(move |txn| {
                Box::pin(async move {
                    let model = room_allotments::Entity::find_by_id(id)
                        .lock_exclusive()
                        .one(txn)
                        .await?
                        .ok_or(RentalsServiceError::AllotmentNotFound)?;
                    if !model.is_active {
                        return Err(RentalsServiceError::AlreadyDeallotted);
                    }
                    let mut am = model.into_active_model();
                    am.is_active = Set(false);
                    am.actual_end_date = Set(Some(actual_end_date));
                    let model = am.update(txn).await?;
                    Ok(allotment_from_model(model))
                })
            })
            .await
            .map_err(unwrap_txn_err)
    }

    async fn find_extra(
        &self,
        allotment_id: i64,
    ) -> Result<Option<AllotmentExtra>, RentalsServiceError> {
        let model = room_allotment_extras::Entity::find()
            .filter(room_allotment_extras::Column::AllotmentId.eq(allotment_id))
            .one(&self.db)
            .await
            .context("find allotment extra")?;
        Ok(model.map(extra_from_model))
    }

    async fn update_extra(
        &self,
        allotment_id: i64,
        patch: &ExtraPatch,
    ) -> Result<AllotmentExtra, RentalsServiceError> {
        let model = room_allotment_extras::Entity::find()
            .filter(room_allotment_extras::Column::AllotmentId.eq(allotment_id))
            .one(&self.db)
            .await
            .context("find allotment extra for update")?
            .ok_or(RentalsServiceError::AllotmentNotFound)?;

        let mut am = model.into_active_model();
        if let Some(v) = patch.agg_available {
            am.agg_available = Set(v);
        }
        if let Some(v) = patch.is_painted {
            am.is_painted = Set(v);
        }
        if let Some(v) = patch.is_water_tank {
            am.is_water_tank = Set(v);
        }
        if let Some(v) = patch.is_grill {
            am.is_grill = Set(v);
        }
        if let Some(v) = patch.is_ele_bill_clear {
            am.is_ele_bill_clear = Set(v);
        }
        let model = am.update(&self.db).await.context("update allotment extra")?;
        Ok(extra_from_model(model))
    }

    async fn active_room_ids(&self) -> Result<Vec<i64>, RentalsServiceError> {
        let ids: Vec<i64> = room_allotments::Entity::find()
            .select_only()
            .column(room_allotments::Column::RoomId)
            .filter(room_allotments::Column::IsActive.eq(true))
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .context("list active room ids")?;
        Ok(ids)
    }
}

fn allotment_from_model(model: room_allotments::Model) -> Allotment {
    Allotment {
        id: model.id,
        person_id: model.person_id,
        room_id: model.room_id,
        start_date: model.start_date,
        end_date: model.end_date,
        actual_end_date: model.actual_end_date,
        is_active: model.is_active,
        ts: model.ts,
    }
}

fn extra_from_model(model: room_allotment_extras::Model) -> AllotmentExtra {
    AllotmentExtra {
        id: model.id,
        allotment_id: model.allotment_id,
        agg_available: model.agg_available,
        is_painted: model.is_painted,
        is_water_tank: model.is_water_tank,
        is_grill: model.is_grill,
        is_ele_bill_clear: model.is_ele_bill_clear,
        ts: model.ts,
    }
}

// ── Ledger repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLedgerRepository {
    pub db: DatabaseConnection,
}

impl LedgerRepository for DbLedgerRepository {
    async fn upsert_rental_details(
        &self,
        allotment_id: i64,
        draft: &RentalDetailsDraft,
        ts: DateTime<Utc>,
    ) -> Result<RentalDetails, RentalsServiceError> {
        let existing = rental_details::Entity::find()
            .filter(rental_details::Column::AllotmentId.eq(allotment_id))
            .one(&self.db)
            .await
            .context("find rental details for upsert")?;

        let model = match existing {
            Some(row) => {
                let mut details = row.into_active_model();
                details.deposit = Set(draft.deposit);
                details.rent = Set(draft.rent);
                details.maintenance = Set(draft.maintenance);
                details.rent_total = Set(draft.rent_total);
                details.ts = Set(ts);
                details
                    .update(&self.db)
                    .await
                    .context("update rental details")?
            }
            None => {
                rental_details::ActiveModel {
                    allotment_id: Set(allotment_id),
                    deposit: Set(draft.deposit),
                    rent: Set(draft.rent),
                    maintenance: Set(draft.maintenance),
                    rent_total: Set(draft.rent_total),
                    ts: Set(ts),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .context("insert rental details")?
            }
        };
        Ok(rental_details_from_model(model))
    }

    async fn find_rental_details(
        &self,
        allotment_id: i64,
    ) -> Result<Option<RentalDetails>, RentalsServiceError> {
        let model = rental_details::Entity::find()
            .filter(rental_details::Column::AllotmentId.eq(allotment_id))
            .one(&self.db)
            .await
            .context("find rental details")?;
        Ok(model.map(rental_details_from_model))
    }

    async fn list_rental_details_by_person(
        &self,
        person_id: i64,
    ) -> Result<Vec<RentalDetails>, RentalsServiceError> {
        let models = rental_details::Entity::find()
            .filter(
                rental_details::Column::AllotmentId.in_subquery(
                    Query::select()
                        .column(room_allotments::Column::Id)
                        .from(room_allotments::Entity)
                        .and_where(Expr::col(room_allotments::Column::PersonId).eq(person_id))
                        .to_owned(),
                ),
            )
            .order_by_desc(rental_details::Column::Ts)
            .all(&self.db)
            .await
            .context("list rental details by person")?;
        Ok(models.into_iter().map(rental_details_from_model).collect())
    }

    async fn create_transaction(
        &self,
        draft: &TransactionDraft,
    ) -> Result<RentTransaction, RentalsServiceError> {
        let model = rent_transactions::ActiveModel {
            tnx_no: Set(draft.tnx_no.clone()),
            allotment_id: Set(draft.allotment_id),
            amount: Set(draft.amount),
            is_rent: Set(draft.is_rent),
            payment_mode: Set(draft.payment_mode.as_str().to_owned()),
            comment: Set(draft.comment.clone()),
            receipt: Set(None),
            ts: Set(draft.ts),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                RentalsServiceError::TxnNumberCollision
            }
            _ => anyhow::Error::new(e).context("create transaction").into(),
        })?;
        Ok(transaction_from_model(model))
    }

    async fn attach_receipt(&self, id: i64, path: &str) -> Result<(), RentalsServiceError> {
        rent_transactions::ActiveModel {
            id: Set(id),
            receipt: Set(Some(path.to_owned())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("attach receipt path")?;
        Ok(())
    }

    async fn list_by_allotment(
        &self,
        allotment_id: i64,
        sort: Sort,
    ) -> Result<Vec<RentTransaction>, RentalsServiceError> {
        let query = rent_transactions::Entity::find()
            .filter(rent_transactions::Column::AllotmentId.eq(allotment_id));
        let query = match sort {
            Sort::Asc => query.order_by_asc(rent_transactions::Column::Ts),
            Sort::Desc => query.order_by_desc(rent_transactions::Column::Ts),
        };
        let models = query
            .all(&self.db)
            .await
            .context("list transactions by allotment")?;
        Ok(models.into_iter().map(transaction_from_model).collect())
    }

    async fn list_by_person(
        &self,
        person_id: i64,
    ) -> Result<Vec<RentTransaction>, RentalsServiceError> {
        let models = rent_transactions::Entity::find()
            .filter(
                rent_transactions::Column::AllotmentId.in_subquery(
                    Query::select()
                        .column(room_allotments::Column::Id)
                        .from(room_allotments::Entity)
                        .and_where(Expr::col(room_allotments::Column::PersonId).eq(person_id))
                        .to_owned(),
                ),
            )
            .order_by_desc(rent_transactions::Column::Ts)
            .all(&self.db)
            .await
            .context("list transactions by person")?;
        Ok(models.into_iter().map(transaction_from_model).collect())
    }
}

fn rental_details_from_model(model: rental_details::Model) -> RentalDetails {
    RentalDetails {
        id: model.id,
        allotment_id: model.allotment_id,
        deposit: model.deposit,
        rent: model.rent,
        maintenance: model.maintenance,
        rent_total: model.rent_total,
        ts: model.ts,
    }
}

fn transaction_from_model(model: rent_transactions::Model) -> RentTransaction {
    RentTransaction {
        id: model.id,
        tnx_no: model.tnx_no,
        allotment_id: model.allotment_id,
        amount: model.amount,
        is_rent: model.is_rent,
        payment_mode: PaymentMode::parse(&model.payment_mode).unwrap_or_default(),
        comment: model.comment,
        receipt: model.receipt,
        ts: model.ts,
    }
}

// ── Notice repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNoticeRepository {
    pub db: DatabaseConnection,
}

impl NoticeRepository for DbNoticeRepository {
    async fn create(
        &self,
        allotment_id: i64,
        code: &str,
        description: Option<&str>,
        ts: DateTime<Utc>,
    ) -> Result<Notice, RentalsServiceError> {
        let model = notices::ActiveModel {
            allotment_id: Set(allotment_id),
            code: Set(code.to_owned()),
            description: Set(description.map(str::to_owned)),
            ts: Set(ts),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create notice")?;
        Ok(notice_from_model(model))
    }

    async fn list_by_allotment(
        &self,
        allotment_id: i64,
    ) -> Result<Vec<Notice>, RentalsServiceError> {
        let models = notices::Entity::find()
            .filter(notices::Column::AllotmentId.eq(allotment_id))
            .order_by_desc(notices::Column::Ts)
            .all(&self.db)
            .await
            .context("list notices by allotment")?;
        Ok(models.into_iter().map(notice_from_model).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, RentalsServiceError> {
        let result = notices::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete notice")?;
        Ok(result.rows_affected > 0)
    }
}

fn notice_from_model(model: notices::Model) -> Notice {
    Notice {
        id: model.id,
        allotment_id: model.allotment_id,
        code: NoticeType::parse(&model.code).unwrap_or_default(),
        description: model.description,
        ts: model.ts,
    }
}

// ── Outbox repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOutboxRepository {
    pub db: DatabaseConnection,
}

impl OutboxRepository for DbOutboxRepository {
    async fn enqueue(&self, event: &NewOutboxEvent) -> Result<(), RentalsServiceError> {
        let now = Utc::now();
        let result = outbox_events::ActiveModel {
            id: Set(Uuid::now_v7()),
            kind: Set(event.kind.clone()),
            payload: Set(event.payload.clone()),
            idempotency_key: Set(event.idempotency_key.clone()),
            attempts: Set(0),
            last_error: Set(None),
            created_at: Set(now),
            next_attempt_at: Set(now),
            processed_at: Set(None),
            failed_at: Set(None),
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            // A duplicate idempotency key means the event is already queued.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Ok(()),
            Err(e) => Err(anyhow::Error::new(e).context("enqueue outbox event").into()),
        }
    }

    async fn due(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<OutboxEvent>, RentalsServiceError> {
        let models = outbox_events::Entity::find()
            .filter(outbox_events::Column::ProcessedAt.is_null())
            .filter(outbox_events::Column::FailedAt.is_null())
            .filter(outbox_events::Column::NextAttemptAt.lte(now))
            .order_by_asc(outbox_events::Column::NextAttemptAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list due outbox events")?;
        Ok(models.into_iter().map(outbox_event_from_model).collect())
    }

    async fn mark_processed(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), RentalsServiceError> {
        outbox_events::ActiveModel {
            id: Set(id),
            processed_at: Set(Some(now)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark outbox event processed")?;
        Ok(())
    }

    async fn mark_failed(
        &self,
        id: Uuid,
        error: &str,
        now: DateTime<Utc>,
        next_attempt_at: Option<DateTime<Utc>>,
    ) -> Result<(), RentalsServiceError> {
        let model = outbox_events::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find outbox event for failure")?
            .ok_or_else(|| anyhow::anyhow!("outbox event {id} disappeared"))?;

        let attempts = model.attempts;
        let mut am = model.into_active_model();
        am.attempts = Set(attempts + 1);
        am.last_error = Set(Some(error.to_owned()));
        match next_attempt_at {
            Some(at) => am.next_attempt_at = Set(at),
            None => am.failed_at = Set(Some(now)),
        }
        am.update(&self.db)
            .await
            .context("mark outbox event failed")?;
        Ok(())
    }
}

fn outbox_event_from_model(model: outbox_events::Model) -> OutboxEvent {
    OutboxEvent {
        id: model.id,
        kind: model.kind,
        payload: model.payload,
        idempotency_key: model.idempotency_key,
        attempts: model.attempts,
        last_error: model.last_error,
        created_at: model.created_at,
        next_attempt_at: model.next_attempt_at,
    }
}
