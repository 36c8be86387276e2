use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use rentman_domain::types::RoomLayout;

use crate::domain::types::{
    BuildingStats, LayoutStats, MeterDetails, MeterInput, NewRoom, Room, RoomPatch,
};
use crate::error::RentalsServiceError;
use crate::state::AppState;
use crate::usecase::availability::{
    AvailableRoomsUseCase, BuildingStatsUseCase, LayoutStatsUseCase,
};
use crate::usecase::room::{
    CreateRoomUseCase, DeleteRoomUseCase, GetMeterUseCase, GetRoomUseCase, ListRoomsUseCase,
    UpdateRoomUseCase, UpsertMeterUseCase,
};

#[derive(Serialize)]
pub struct RoomResponse {
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

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            room_no: room.room_no,
            floor_no: room.floor_no,
            address: room.address,
            building: room.building,
            room_code: room.room_code,
            code_name: room.code_name,
            area: room.area,
            layout: room.layout,
        }
    }
}

#[derive(Deserialize)]
pub struct BuildingFilter {
    pub building_code: Option<String>,
}

// ── POST /rooms ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub room_no: i32,
    pub floor_no: i16,
    pub address: Option<String>,
    pub building: String,
    pub area: Option<i32>,
    pub layout: Option<RoomLayout>,
}

pub async fn create_room(
    State(state): State<AppState>,
    Json(body): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), RentalsServiceError> {
    let usecase = CreateRoomUseCase {
        repo: state.room_repo(),
    };
    let room = usecase
        .execute(NewRoom {
            room_no: body.room_no,
            floor_no: body.floor_no,
            address: body.address,
            building: body.building,
            area: body.area,
            layout: body.layout,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(room.into())))
}

// ── GET /rooms ───────────────────────────────────────────────────────────────

pub async fn list_rooms(
    State(state): State<AppState>,
    Query(filter): Query<BuildingFilter>,
) -> Result<Json<Vec<RoomResponse>>, RentalsServiceError> {
    let usecase = ListRoomsUseCase {
        repo: state.room_repo(),
    };
    let rooms = usecase.execute(filter.building_code).await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

// ── GET /rooms/available ─────────────────────────────────────────────────────

pub async fn list_available_rooms(
    State(state): State<AppState>,
    Query(filter): Query<BuildingFilter>,
) -> Result<Json<Vec<RoomResponse>>, RentalsServiceError> {
    let usecase = AvailableRoomsUseCase {
        rooms: state.room_repo(),
        allotments: state.allotment_repo(),
    };
    let rooms = usecase.execute(filter.building_code).await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

// ── GET /rooms/stats ─────────────────────────────────────────────────────────

pub async fn building_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<BuildingStats>>, RentalsServiceError> {
    let usecase = BuildingStatsUseCase {
        rooms: state.room_repo(),
        allotments: state.allotment_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── GET /rooms/stats/layout ──────────────────────────────────────────────────

pub async fn layout_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<LayoutStats>>, RentalsServiceError> {
    let usecase = LayoutStatsUseCase {
        rooms: state.room_repo(),
        allotments: state.allotment_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── GET /rooms/{id} ──────────────────────────────────────────────────────────

pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
) -> Result<Json<RoomResponse>, RentalsServiceError> {
    let usecase = GetRoomUseCase {
        repo: state.room_repo(),
    };
    let room = usecase.execute(room_id).await?;
    Ok(Json(room.into()))
}

// ── PATCH /rooms/{id} ────────────────────────────────────────────────────────

/// Distinguishes an explicit `"address": null` (clear and re-derive from the
/// building template) from an absent field (keep the stored address).
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
pub struct UpdateRoomRequest {
    pub room_no: Option<i32>,
    pub floor_no: Option<i16>,
    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
    pub building: Option<String>,
    pub area: Option<i32>,
    pub layout: Option<RoomLayout>,
}

pub async fn update_room(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
    Json(body): Json<UpdateRoomRequest>,
) -> Result<Json<RoomResponse>, RentalsServiceError> {
    let usecase = UpdateRoomUseCase {
        repo: state.room_repo(),
    };
    let room = usecase
        .execute(
            room_id,
            RoomPatch {
                room_no: body.room_no,
                floor_no: body.floor_no,
                address: body.address,
                building: body.building,
                area: body.area,
                layout: body.layout,
            },
        )
        .await?;
    Ok(Json(room.into()))
}

// ── DELETE /rooms/{id} ───────────────────────────────────────────────────────

pub async fn delete_room(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
) -> Result<StatusCode, RentalsServiceError> {
    let usecase = DeleteRoomUseCase {
        repo: state.room_repo(),
    };
    usecase.execute(room_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PUT/GET /rooms/{id}/meter ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct MeterRequest {
    pub meter_no: String,
    pub bu_code: i16,
    pub consumer_type: Option<String>,
}

#[derive(Serialize)]
pub struct MeterResponse {
    pub id: i64,
    pub room_id: i64,
    pub meter_no: String,
    pub bu_code: i16,
    pub consumer_type: String,
}

impl From<MeterDetails> for MeterResponse {
    fn from(meter: MeterDetails) -> Self {
        Self {
            id: meter.id,
            room_id: meter.room_id,
            meter_no: meter.meter_no,
            bu_code: meter.bu_code,
            consumer_type: meter.consumer_type,
        }
    }
}

pub async fn upsert_meter(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
    Json(body): Json<MeterRequest>,
) -> Result<Json<MeterResponse>, RentalsServiceError> {
    let usecase = UpsertMeterUseCase {
        repo: state.room_repo(),
    };
    let meter = usecase
        .execute(
            room_id,
            MeterInput {
                meter_no: body.meter_no,
                bu_code: body.bu_code,
                consumer_type: body.consumer_type.unwrap_or_else(|| "LT".to_owned()),
            },
        )
        .await?;
    Ok(Json(meter.into()))
}

pub async fn get_meter(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
) -> Result<Json<MeterResponse>, RentalsServiceError> {
    let usecase = GetMeterUseCase {
        repo: state.room_repo(),
    };
    let meter = usecase.execute(room_id).await?;
    Ok(Json(meter.into()))
}
