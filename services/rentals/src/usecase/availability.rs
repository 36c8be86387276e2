use std::collections::{BTreeMap, HashSet};

use rentman_domain::building;

use crate::domain::repository::{AllotmentRepository, RoomRepository};
use crate::domain::types::{BuildingStats, LayoutStats, Room};
use crate::error::RentalsServiceError;

// Availability is always computed per request as a set difference over the
// current data; it is never cached.

// ── AvailableRooms ───────────────────────────────────────────────────────────

pub struct AvailableRoomsUseCase<R: RoomRepository, A: AllotmentRepository> {
    pub rooms: R,
    pub allotments: A,
}

impl<R: RoomRepository, A: AllotmentRepository> AvailableRoomsUseCase<R, A> {
    pub async fn execute(
        &self,
        building_code: Option<String>,
    ) -> Result<Vec<Room>, RentalsServiceError> {
        let building = building_code.map(|c| building::normalize_code(&c));
        let rooms = self.rooms.list(building.as_deref()).await?;
        let occupied: HashSet<i64> = self.allotments.active_room_ids().await?.into_iter().collect();
        Ok(rooms
            .into_iter()
            .filter(|room| !occupied.contains(&room.id))
            .collect())
    }
}

// ── BuildingStats ────────────────────────────────────────────────────────────

pub struct BuildingStatsUseCase<R: RoomRepository, A: AllotmentRepository> {
    pub rooms: R,
    pub allotments: A,
}

impl<R: RoomRepository, A: AllotmentRepository> BuildingStatsUseCase<R, A> {
    pub async fn execute(&self) -> Result<Vec<BuildingStats>, RentalsServiceError> {
        let rooms = self.rooms.list(None).await?;
        let occupied: HashSet<i64> = self.allotments.active_room_ids().await?.into_iter().collect();

        let mut groups: BTreeMap<String, (u64, u64)> = BTreeMap::new();
        for room in &rooms {
            let entry = groups.entry(room.building.clone()).or_default();
            entry.0 += 1;
            if occupied.contains(&room.id) {
                entry.1 += 1;
            }
        }
        Ok(groups
            .into_iter()
            .map(|(building, (total, occupied))| BuildingStats {
                building,
                total_rooms: total,
                occupied_rooms: occupied,
                vacant_rooms: total - occupied,
            })
            .collect())
    }
}

// ── LayoutStats ──────────────────────────────────────────────────────────────

pub struct LayoutStatsUseCase<R: RoomRepository, A: AllotmentRepository> {
    pub rooms: R,
    pub allotments: A,
}

impl<R: RoomRepository, A: AllotmentRepository> LayoutStatsUseCase<R, A> {
    pub async fn execute(&self) -> Result<Vec<LayoutStats>, RentalsServiceError> {
        let rooms = self.rooms.list(None).await?;
        let occupied: HashSet<i64> = self.allotments.active_room_ids().await?.into_iter().collect();

        let mut groups: BTreeMap<String, (u64, u64)> = BTreeMap::new();
        for room in &rooms {
            let key = room
                .layout
                .map(|l| l.as_str().to_owned())
                .unwrap_or_else(|| "Unknown".to_owned());
            let entry = groups.entry(key).or_default();
            entry.0 += 1;
            if occupied.contains(&room.id) {
                entry.1 += 1;
            }
        }
        Ok(groups
            .into_iter()
            .map(|(layout, (total, occupied))| LayoutStats {
                layout,
                total_rooms: total,
                occupied_rooms: occupied,
                vacant_rooms: total - occupied,
            })
            .collect())
    }
}
