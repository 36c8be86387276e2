use rentman_domain::building;

use crate::domain::repository::RoomRepository;
use crate::domain::types::{MeterDetails, MeterInput, NewRoom, Room, RoomDraft, RoomPatch};
use crate::error::RentalsServiceError;

/// Build the persistable draft from resolved room fields. `room_code` and
/// `code_name` are always recomputed; an absent address falls back to the
/// building template.
fn resolve_draft(
    room_no: i32,
    floor_no: i16,
    address: Option<String>,
    building_code: String,
    area: Option<i32>,
    layout: Option<rentman_domain::types::RoomLayout>,
) -> RoomDraft {
    let building_code = building::normalize_code(&building_code);
    let address = address.or_else(|| building::derive_address(&building_code, room_no, floor_no));
    RoomDraft {
        room_no,
        floor_no,
        address,
        room_code: building::room_code(room_no, &building_code),
        code_name: building::code_name(room_no, &building_code),
        building: building_code,
        area,
        layout,
    }
}

// ── CreateRoom ───────────────────────────────────────────────────────────────

pub struct CreateRoomUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> CreateRoomUseCase<R> {
    pub async fn execute(&self, input: NewRoom) -> Result<Room, RentalsServiceError> {
        let draft = resolve_draft(
            input.room_no,
            input.floor_no,
            input.address,
            input.building,
            input.area,
            input.layout,
        );
        self.repo.create(&draft).await
    }
}

// ── GetRoom ──────────────────────────────────────────────────────────────────

pub struct GetRoomUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> GetRoomUseCase<R> {
    pub async fn execute(&self, room_id: i64) -> Result<Room, RentalsServiceError> {
        self.repo
            .find_by_id(room_id)
            .await?
            .ok_or(RentalsServiceError::RoomNotFound)
    }
}

// ── ListRooms ────────────────────────────────────────────────────────────────

pub struct ListRoomsUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> ListRoomsUseCase<R> {
    pub async fn execute(
        &self,
        building_code: Option<String>,
    ) -> Result<Vec<Room>, RentalsServiceError> {
        let building = building_code.map(|c| building::normalize_code(&c));
        self.repo.list(building.as_deref()).await
    }
}

// ── UpdateRoom ───────────────────────────────────────────────────────────────

pub struct UpdateRoomUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> UpdateRoomUseCase<R> {
    pub async fn execute(
        &self,
        room_id: i64,
        patch: RoomPatch,
    ) -> Result<Room, RentalsServiceError> {
        if patch.is_empty() {
            return Err(RentalsServiceError::MissingData);
        }
        let room = self
            .repo
            .find_by_id(room_id)
            .await?
            .ok_or(RentalsServiceError::RoomNotFound)?;
        // An explicit null address clears the stored value so resolve_draft
        // falls back to the building template.
        let address = match patch.address {
            Some(address) => address,
            None => room.address,
        };
        let draft = resolve_draft(
            patch.room_no.unwrap_or(room.room_no),
            patch.floor_no.unwrap_or(room.floor_no),
            address,
            patch.building.unwrap_or(room.building),
            patch.area.or(room.area),
            patch.layout.or(room.layout),
        );
        self.repo.update(room_id, &draft).await?;
        self.repo
            .find_by_id(room_id)
            .await?
            .ok_or(RentalsServiceError::RoomNotFound)
    }
}

// ── DeleteRoom ───────────────────────────────────────────────────────────────

pub struct DeleteRoomUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> DeleteRoomUseCase<R> {
    pub async fn execute(&self, room_id: i64) -> Result<(), RentalsServiceError> {
        if self.repo.delete(room_id).await? {
            Ok(())
        } else {
            Err(RentalsServiceError::RoomNotFound)
        }
    }
}

// ── UpsertMeter ──────────────────────────────────────────────────────────────

pub struct UpsertMeterUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> UpsertMeterUseCase<R> {
    pub async fn execute(
        &self,
        room_id: i64,
        input: MeterInput,
    ) -> Result<MeterDetails, RentalsServiceError> {
        if self.repo.find_by_id(room_id).await?.is_none() {
            return Err(RentalsServiceError::RoomNotFound);
        }
        self.repo.upsert_meter(room_id, &input).await
    }
}

// ── GetMeter ─────────────────────────────────────────────────────────────────

pub struct GetMeterUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> GetMeterUseCase<R> {
    pub async fn execute(&self, room_id: i64) -> Result<MeterDetails, RentalsServiceError> {
        self.repo
            .find_meter(room_id)
            .await?
            .ok_or(RentalsServiceError::MeterNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockRoomRepo {
        rooms: Mutex<Vec<Room>>,
        meter: Mutex<Option<MeterDetails>>,
    }

    impl RoomRepository for MockRoomRepo {
        async fn create(&self, draft: &RoomDraft) -> Result<Room, RentalsServiceError> {
            let mut rooms = self.rooms.lock().unwrap();
            let room = Room {
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
            rooms.push(room.clone());
            Ok(room)
        }
        async fn find_by_id(&self, id: i64) -> Result<Option<Room>, RentalsServiceError> {
            Ok(self.rooms.lock().unwrap().iter().find(|r| r.id == id).cloned())
        }
        async fn list(&self, building: Option<&str>) -> Result<Vec<Room>, RentalsServiceError> {
            let rooms = self.rooms.lock().unwrap();
            Ok(rooms
                .iter()
                .filter(|r| building.is_none_or(|b| r.building == b))
                .cloned()
                .collect())
        }
        async fn update(&self, id: i64, draft: &RoomDraft) -> Result<(), RentalsServiceError> {
            let mut rooms = self.rooms.lock().unwrap();
            if let Some(room) = rooms.iter_mut().find(|r| r.id == id) {
                room.room_no = draft.room_no;
                room.floor_no = draft.floor_no;
                room.address = draft.address.clone();
                room.building = draft.building.clone();
                room.room_code = draft.room_code.clone();
                room.code_name = draft.code_name.clone();
                room.area = draft.area;
                room.layout = draft.layout;
            }
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
            let meter = MeterDetails {
                id: 1,
                room_id,
                meter_no: input.meter_no.clone(),
                bu_code: input.bu_code,
                consumer_type: input.consumer_type.clone(),
            };
            *self.meter.lock().unwrap() = Some(meter.clone());
            Ok(meter)
        }
        async fn find_meter(
            &self,
            _room_id: i64,
        ) -> Result<Option<MeterDetails>, RentalsServiceError> {
            Ok(self.meter.lock().unwrap().clone())
        }
    }

    fn new_room(room_no: i32, building: &str) -> NewRoom {
        NewRoom {
            room_no,
            floor_no: 2,
            address: None,
            building: building.into(),
            area: None,
            layout: None,
        }
    }

    #[tokio::test]
    async fn should_derive_room_code_and_address_on_create() {
        let usecase = CreateRoomUseCase {
            repo: MockRoomRepo::default(),
        };
        let room = usecase.execute(new_room(101, "Vaman Nivas")).await.unwrap();
        assert_eq!(room.building, "Vaman_Nivas");
        assert_eq!(room.room_code, "101_Vaman_Nivas");
        assert_eq!(room.code_name, "101-Vaman_Nivas");
        assert!(room.address.unwrap().contains("Room No 101"));
    }

    #[tokio::test]
    async fn should_keep_explicit_address() {
        let usecase = CreateRoomUseCase {
            repo: MockRoomRepo::default(),
        };
        let mut input = new_room(101, "Vaman_Nivas");
        input.address = Some("Custom address".into());
        let room = usecase.execute(input).await.unwrap();
        assert_eq!(room.address.as_deref(), Some("Custom address"));
    }

    #[tokio::test]
    async fn should_recompute_derived_fields_on_update() {
        let create = CreateRoomUseCase {
            repo: MockRoomRepo::default(),
        };
        let created = create.execute(new_room(101, "Vaman_Nivas")).await.unwrap();
        let updated = UpdateRoomUseCase { repo: create.repo }
            .execute(
                created.id,
                RoomPatch {
                    room_no: Some(102),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.room_code, "102_Vaman_Nivas");
        assert_eq!(updated.code_name, "102-Vaman_Nivas");
    }

    #[tokio::test]
    async fn should_clear_address_and_rederive_from_template() {
        let create = CreateRoomUseCase {
            repo: MockRoomRepo::default(),
        };
        let mut input = new_room(101, "Vaman_Nivas");
        input.address = Some("Custom address".into());
        let created = create.execute(input).await.unwrap();

        let updated = UpdateRoomUseCase { repo: create.repo }
            .execute(
                created.id,
                RoomPatch {
                    address: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.address.unwrap().contains("Room No 101"));
    }

    #[tokio::test]
    async fn should_replace_address_on_update() {
        let create = CreateRoomUseCase {
            repo: MockRoomRepo::default(),
        };
        let created = create.execute(new_room(101, "Vaman_Nivas")).await.unwrap();

        let updated = UpdateRoomUseCase { repo: create.repo }
            .execute(
                created.id,
                RoomPatch {
                    address: Some(Some("Custom address".into())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.address.as_deref(), Some("Custom address"));
    }

    #[tokio::test]
    async fn should_reject_empty_room_patch() {
        let usecase = UpdateRoomUseCase {
            repo: MockRoomRepo::default(),
        };
        let result = usecase.execute(1, RoomPatch::default()).await;
        assert!(matches!(result, Err(RentalsServiceError::MissingData)));
    }
}
