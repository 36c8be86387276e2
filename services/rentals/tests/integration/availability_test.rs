use chrono::NaiveDate;

use rentman_rentals::domain::types::NewAllotment;
use rentman_rentals::usecase::allotment::{CreateAllotmentUseCase, TerminateAllotmentUseCase};
use rentman_rentals::usecase::availability::{AvailableRoomsUseCase, BuildingStatsUseCase};

use crate::helpers::{
    MockAllotmentRepo, MockLedgerRepo, MockOutboxRepo, MockPersonRepo, MockRoomRepo, fixed_clock,
    test_person, test_room,
};

#[tokio::test]
async fn should_reflect_allotment_lifecycle_in_availability() {
    let rooms = MockRoomRepo::new(vec![
        test_room(1, 101, "Vaman_Nivas"),
        test_room(2, 102, "Vaman_Nivas"),
    ]);
    let allotments = MockAllotmentRepo::default();

    let available = AvailableRoomsUseCase {
        rooms: rooms.clone(),
        allotments: allotments.clone(),
    };
    assert_eq!(available.execute(None).await.unwrap().len(), 2);

    let create = CreateAllotmentUseCase {
        persons: MockPersonRepo::new(vec![test_person(1)]),
        rooms: rooms.clone(),
        repo: allotments.clone(),
        clock: fixed_clock(),
    };
    let allotment = create
        .execute(
            1,
            NewAllotment {
                room_id: 1,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end_date: None,
            },
        )
        .await
        .unwrap();

    let left: Vec<i64> = available
        .execute(None)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(left, vec![2], "allotted room must drop out of availability");

    let terminate = TerminateAllotmentUseCase {
        repo: allotments,
        ledger: MockLedgerRepo::default(),
        outbox: MockOutboxRepo::default(),
        clock: fixed_clock(),
    };
    terminate.execute(allotment.id, None).await.unwrap();

    assert_eq!(
        available.execute(None).await.unwrap().len(),
        2,
        "terminated allotment must free the room"
    );
}

#[tokio::test]
async fn should_normalize_building_filter() {
    let rooms = MockRoomRepo::new(vec![
        test_room(1, 101, "Vaman_Nivas"),
        test_room(2, 201, "Abhishek_Apartment"),
    ]);
    let available = AvailableRoomsUseCase {
        rooms,
        allotments: MockAllotmentRepo::default(),
    };

    // Spaces in the query map onto the canonical underscore form.
    let found = available
        .execute(Some("Vaman Nivas".to_owned()))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].building, "Vaman_Nivas");
}

#[tokio::test]
async fn should_keep_building_stats_consistent() {
    let rooms = MockRoomRepo::new(vec![
        test_room(1, 101, "Vaman_Nivas"),
        test_room(2, 102, "Vaman_Nivas"),
        test_room(3, 201, "Abhishek_Apartment"),
    ]);
    let allotments = MockAllotmentRepo::default();

    let create = CreateAllotmentUseCase {
        persons: MockPersonRepo::new(vec![test_person(1)]),
        rooms: rooms.clone(),
        repo: allotments.clone(),
        clock: fixed_clock(),
    };
    create
        .execute(
            1,
            NewAllotment {
                room_id: 1,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end_date: None,
            },
        )
        .await
        .unwrap();

    let stats = BuildingStatsUseCase { rooms, allotments }
        .execute()
        .await
        .unwrap();

    assert_eq!(stats.len(), 2);
    for entry in &stats {
        assert_eq!(entry.total_rooms, entry.occupied_rooms + entry.vacant_rooms);
    }
    let vaman = stats.iter().find(|s| s.building == "Vaman_Nivas").unwrap();
    assert_eq!(vaman.total_rooms, 2);
    assert_eq!(vaman.occupied_rooms, 1);
}
