use chrono::NaiveDate;

use rentman_domain::types::PaymentMode;
use rentman_rentals::domain::types::{NewAllotment, NewTransaction};
use rentman_rentals::error::RentalsServiceError;
use rentman_rentals::usecase::allotment::CreateAllotmentUseCase;
use rentman_rentals::usecase::ledger::{
    CreateTransactionUseCase, UpsertRentalDetailsInput, UpsertRentalDetailsUseCase,
};

use crate::helpers::{
    MockAllotmentRepo, MockLedgerRepo, MockOutboxRepo, MockPersonRepo, MockReceiptStore,
    MockRoomRepo, fixed_clock, test_person, test_room,
};

async fn allotted_fixture() -> (MockAllotmentRepo, MockRoomRepo, i64) {
    let allotments = MockAllotmentRepo::default();
    let rooms = MockRoomRepo::new(vec![test_room(1, 101, "Vaman_Nivas")]);
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
    (allotments, rooms, allotment.id)
}

fn rent_payment(amount: i64) -> NewTransaction {
    NewTransaction {
        amount,
        is_rent: true,
        payment_mode: PaymentMode::Cash,
        comment: None,
    }
}

// ── Rental details ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_rent_total_only_when_rent_and_maintenance_are_set() {
    let (allotments, _, allotment_id) = allotted_fixture().await;
    let ledger = MockLedgerRepo::default();
    let uc = UpsertRentalDetailsUseCase {
        allotments,
        ledger: ledger.clone(),
        clock: fixed_clock(),
    };

    let details = uc
        .execute(
            allotment_id,
            UpsertRentalDetailsInput {
                deposit: 50000,
                rent: 9000,
                maintenance: 500,
            },
        )
        .await
        .unwrap();
    assert_eq!(details.rent_total, 9500);

    // A zero component leaves the previously computed total untouched.
    let details = uc
        .execute(
            allotment_id,
            UpsertRentalDetailsInput {
                deposit: 50000,
                rent: 9000,
                maintenance: 0,
            },
        )
        .await
        .unwrap();
    assert_eq!(details.rent, 9000);
    assert_eq!(details.maintenance, 0);
    assert_eq!(details.rent_total, 9500);
}

#[tokio::test]
async fn should_reject_negative_rental_details() {
    let (allotments, _, allotment_id) = allotted_fixture().await;
    let uc = UpsertRentalDetailsUseCase {
        allotments,
        ledger: MockLedgerRepo::default(),
        clock: fixed_clock(),
    };
    let result = uc
        .execute(
            allotment_id,
            UpsertRentalDetailsInput {
                deposit: -1,
                rent: 9000,
                maintenance: 500,
            },
        )
        .await;
    assert!(matches!(result, Err(RentalsServiceError::NegativeAmount)));
}

// ── Transactions ─────────────────────────────────────────────────────────────

fn transaction_usecase(
    allotments: MockAllotmentRepo,
    rooms: MockRoomRepo,
    ledger: MockLedgerRepo,
    receipts: MockReceiptStore,
    outbox: MockOutboxRepo,
) -> CreateTransactionUseCase<
    MockAllotmentRepo,
    MockRoomRepo,
    MockLedgerRepo,
    MockReceiptStore,
    MockOutboxRepo,
> {
    CreateTransactionUseCase {
        allotments,
        rooms,
        ledger,
        receipts,
        outbox,
        clock: fixed_clock(),
    }
}

#[tokio::test]
async fn should_stamp_well_formed_transaction_number() {
    let (allotments, rooms, allotment_id) = allotted_fixture().await;
    let uc = transaction_usecase(
        allotments,
        rooms,
        MockLedgerRepo::default(),
        MockReceiptStore::default(),
        MockOutboxRepo::default(),
    );

    let tnx = uc.execute(allotment_id, rent_payment(9000)).await.unwrap();

    let parts: Vec<&str> = tnx.tnx_no.split('_').collect();
    assert_eq!(parts.len(), 5, "unexpected shape: {}", tnx.tnx_no);
    assert_eq!(parts[0], "TXN");
    // %d%m%Y%H%M%S of the fixed clock.
    assert_eq!(parts[1], "15062024100000");
    assert_eq!(parts[2], "V", "building letter for Vaman_Nivas");
    assert_eq!(parts[3], "101");
    let suffix: u32 = parts[4].parse().unwrap();
    assert!((1000..=9999).contains(&suffix));
}

#[tokio::test]
async fn should_retry_transaction_number_on_collision() {
    let (allotments, rooms, allotment_id) = allotted_fixture().await;
    let ledger = MockLedgerRepo::with_collisions(1);
    let uc = transaction_usecase(
        allotments,
        rooms,
        ledger.clone(),
        MockReceiptStore::default(),
        MockOutboxRepo::default(),
    );

    let tnx = uc.execute(allotment_id, rent_payment(9000)).await.unwrap();

    assert_eq!(tnx.amount, 9000);
    assert_eq!(ledger.transactions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_give_up_after_bounded_collision_retries() {
    let (allotments, rooms, allotment_id) = allotted_fixture().await;
    let uc = transaction_usecase(
        allotments,
        rooms,
        MockLedgerRepo::with_collisions(3),
        MockReceiptStore::default(),
        MockOutboxRepo::default(),
    );

    let result = uc.execute(allotment_id, rent_payment(9000)).await;

    assert!(
        matches!(result, Err(RentalsServiceError::TxnNumberCollision)),
        "expected TxnNumberCollision, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_negative_payment() {
    let (allotments, rooms, allotment_id) = allotted_fixture().await;
    let uc = transaction_usecase(
        allotments,
        rooms,
        MockLedgerRepo::default(),
        MockReceiptStore::default(),
        MockOutboxRepo::default(),
    );

    let result = uc.execute(allotment_id, rent_payment(-1)).await;
    assert!(matches!(result, Err(RentalsServiceError::NegativeAmount)));
}

#[tokio::test]
async fn should_attach_receipt_path_to_stored_transaction() {
    let (allotments, rooms, allotment_id) = allotted_fixture().await;
    let ledger = MockLedgerRepo::default();
    let receipts = MockReceiptStore::default();
    let uc = transaction_usecase(
        allotments,
        rooms,
        ledger.clone(),
        receipts.clone(),
        MockOutboxRepo::default(),
    );

    let tnx = uc.execute(allotment_id, rent_payment(9000)).await.unwrap();

    let expected = format!("receipts/html/{}.html", tnx.tnx_no);
    assert_eq!(tnx.receipt.as_deref(), Some(expected.as_str()));
    assert_eq!(
        ledger.transactions.lock().unwrap()[0].receipt.as_deref(),
        Some(expected.as_str())
    );
    assert_eq!(receipts.written.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_record_payment_even_when_receipt_write_fails() {
    let (allotments, rooms, allotment_id) = allotted_fixture().await;
    let ledger = MockLedgerRepo::default();
    let uc = transaction_usecase(
        allotments,
        rooms,
        ledger.clone(),
        MockReceiptStore::failing(),
        MockOutboxRepo::default(),
    );

    let tnx = uc.execute(allotment_id, rent_payment(9000)).await.unwrap();

    assert!(tnx.receipt.is_none());
    assert_eq!(ledger.transactions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_record_payment_even_when_outbox_is_down() {
    let (allotments, rooms, allotment_id) = allotted_fixture().await;
    let ledger = MockLedgerRepo::default();
    let uc = transaction_usecase(
        allotments,
        rooms,
        ledger.clone(),
        MockReceiptStore::default(),
        MockOutboxRepo::failing(),
    );

    let tnx = uc.execute(allotment_id, rent_payment(9000)).await.unwrap();

    assert_eq!(tnx.amount, 9000);
    assert_eq!(ledger.transactions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_enqueue_payment_recorded_event() {
    let (allotments, rooms, allotment_id) = allotted_fixture().await;
    let outbox = MockOutboxRepo::default();
    let uc = transaction_usecase(
        allotments,
        rooms,
        MockLedgerRepo::default(),
        MockReceiptStore::default(),
        outbox.clone(),
    );

    let tnx = uc.execute(allotment_id, rent_payment(9000)).await.unwrap();

    let events = outbox.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, "payment.recorded");
    assert_eq!(
        events[0].idempotency_key,
        format!("payment.recorded:{}", tnx.tnx_no)
    );
    assert_eq!(events[0].payload["amount"], 9000);
}
