use chrono::NaiveDate;

use rentman_rentals::domain::types::NewAllotment;
use rentman_rentals::error::RentalsServiceError;
use rentman_rentals::usecase::allotment::{CreateAllotmentUseCase, TerminateAllotmentUseCase};

use crate::helpers::{
    MockAllotmentRepo, MockLedgerRepo, MockOutboxRepo, MockPersonRepo, MockReceiptStore,
    MockRoomRepo, fixed_clock, test_person, test_room,
};

fn new_allotment(room_id: i64) -> NewAllotment {
    NewAllotment {
        room_id,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: None,
    }
}

#[tokio::test]
async fn should_allot_room_with_derived_end_date() {
    let uc = CreateAllotmentUseCase {
        persons: MockPersonRepo::new(vec![test_person(1)]),
        rooms: MockRoomRepo::new(vec![test_room(1, 101, "Vaman_Nivas")]),
        repo: MockAllotmentRepo::default(),
        clock: fixed_clock(),
    };

    let allotment = uc.execute(1, new_allotment(1)).await.unwrap();

    assert_eq!(
        allotment.end_date,
        NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(),
        "default lease should run eleven months, inclusive"
    );
    assert!(allotment.is_active);
    assert!(allotment.actual_end_date.is_none());
}

#[tokio::test]
async fn should_reject_second_active_allotment_for_same_room() {
    let repo = MockAllotmentRepo::default();
    let uc = CreateAllotmentUseCase {
        persons: MockPersonRepo::new(vec![test_person(1), test_person(2)]),
        rooms: MockRoomRepo::new(vec![test_room(1, 101, "Vaman_Nivas")]),
        repo: repo.clone(),
        clock: fixed_clock(),
    };

    uc.execute(1, new_allotment(1)).await.unwrap();
    let result = uc.execute(2, new_allotment(1)).await;

    assert!(
        matches!(result, Err(RentalsServiceError::RoomOccupied)),
        "expected RoomOccupied, got {result:?}"
    );
    assert_eq!(repo.allotments.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_default_actual_end_date_to_today() {
    let repo = MockAllotmentRepo::default();
    let create = CreateAllotmentUseCase {
        persons: MockPersonRepo::new(vec![test_person(1)]),
        rooms: MockRoomRepo::new(vec![test_room(1, 101, "Vaman_Nivas")]),
        repo: repo.clone(),
        clock: fixed_clock(),
    };
    let allotment = create.execute(1, new_allotment(1)).await.unwrap();

    let terminate = TerminateAllotmentUseCase {
        repo,
        ledger: MockLedgerRepo::default(),
        outbox: MockOutboxRepo::default(),
        clock: fixed_clock(),
    };
    let terminated = terminate.execute(allotment.id, None).await.unwrap();

    assert!(!terminated.is_active);
    assert_eq!(
        terminated.actual_end_date,
        Some(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    );
}

#[tokio::test]
async fn should_reject_terminating_inactive_allotment() {
    let repo = MockAllotmentRepo::default();
    let create = CreateAllotmentUseCase {
        persons: MockPersonRepo::new(vec![test_person(1)]),
        rooms: MockRoomRepo::new(vec![test_room(1, 101, "Vaman_Nivas")]),
        repo: repo.clone(),
        clock: fixed_clock(),
    };
    let allotment = create.execute(1, new_allotment(1)).await.unwrap();

    let terminate = TerminateAllotmentUseCase {
        repo,
        ledger: MockLedgerRepo::default(),
        outbox: MockOutboxRepo::default(),
        clock: fixed_clock(),
    };
    terminate.execute(allotment.id, None).await.unwrap();
    let result = terminate.execute(allotment.id, None).await;

    assert!(
        matches!(result, Err(RentalsServiceError::AlreadyDeallotted)),
        "expected AlreadyDeallotted, got {result:?}"
    );
}

#[tokio::test]
async fn should_enqueue_termination_summary_with_numbered_payments() {
    use rentman_domain::types::PaymentMode;
    use rentman_rentals::domain::types::NewTransaction;
    use rentman_rentals::usecase::ledger::CreateTransactionUseCase;

    let allotments = MockAllotmentRepo::default();
    let ledger = MockLedgerRepo::default();
    let outbox = MockOutboxRepo::default();
    let rooms = MockRoomRepo::new(vec![test_room(1, 101, "Vaman_Nivas")]);

    let create = CreateAllotmentUseCase {
        persons: MockPersonRepo::new(vec![test_person(1)]),
        rooms: rooms.clone(),
        repo: allotments.clone(),
        clock: fixed_clock(),
    };
    let allotment = create.execute(1, new_allotment(1)).await.unwrap();

    let pay = CreateTransactionUseCase {
        allotments: allotments.clone(),
        rooms,
        ledger: ledger.clone(),
        receipts: MockReceiptStore::default(),
        outbox: outbox.clone(),
        clock: fixed_clock(),
    };
    for _ in 0..2 {
        pay.execute(
            allotment.id,
            NewTransaction {
                amount: 9000,
                is_rent: true,
                payment_mode: PaymentMode::Cash,
                comment: None,
            },
        )
        .await
        .unwrap();
    }

    let terminate = TerminateAllotmentUseCase {
        repo: allotments,
        ledger,
        outbox: outbox.clone(),
        clock: fixed_clock(),
    };
    terminate.execute(allotment.id, None).await.unwrap();

    let events = outbox.events.lock().unwrap();
    let event = events
        .iter()
        .find(|e| e.kind == "allotment.terminated")
        .expect("termination event should be enqueued");
    assert_eq!(
        event.idempotency_key,
        format!("allotment.terminated:{}", allotment.id)
    );
    let payments = event.payload["payments"].as_array().unwrap();
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0]["no"], 1);
    assert_eq!(payments[1]["no"], 2);
}

#[tokio::test]
async fn should_terminate_even_when_outbox_is_down() {
    let allotments = MockAllotmentRepo::default();
    let create = CreateAllotmentUseCase {
        persons: MockPersonRepo::new(vec![test_person(1)]),
        rooms: MockRoomRepo::new(vec![test_room(1, 101, "Vaman_Nivas")]),
        repo: allotments.clone(),
        clock: fixed_clock(),
    };
    let allotment = create.execute(1, new_allotment(1)).await.unwrap();

    let terminate = TerminateAllotmentUseCase {
        repo: allotments,
        ledger: MockLedgerRepo::default(),
        outbox: MockOutboxRepo::failing(),
        clock: fixed_clock(),
    };
    let terminated = terminate.execute(allotment.id, None).await.unwrap();

    assert!(!terminated.is_active, "notification failure must not roll back");
}
