use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use rentman_core::health::{healthz, readyz};
use rentman_core::middleware::request_id_layer;

use crate::handlers::{
    allotment::{
        create_allotment, get_allotment, list_allotments_by_person, terminate_allotment,
        update_extra,
    },
    ledger::{
        create_transaction, get_rental_details, list_rental_details_by_person, list_transactions,
        list_transactions_by_person, upsert_rental_details,
    },
    notice::{create_notice, delete_notice, list_notices},
    person::{create_person, delete_person, get_person, list_persons, update_person},
    profile::{get_address, get_contact, get_docs, upsert_address, upsert_contact, upsert_docs},
    room::{
        building_stats, create_room, delete_room, get_meter, get_room, layout_stats,
        list_available_rooms, list_rooms, update_room, upsert_meter,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Persons
        .route("/persons", post(create_person).get(list_persons))
        .route(
            "/persons/{id}",
            get(get_person).patch(update_person).delete(delete_person),
        )
        .route("/persons/{id}/contact", put(upsert_contact).get(get_contact))
        .route("/persons/{id}/address", put(upsert_address).get(get_address))
        .route("/persons/{id}/docs", put(upsert_docs).get(get_docs))
        // Rooms
        .route("/rooms", post(create_room).get(list_rooms))
        .route("/rooms/available", get(list_available_rooms))
        .route("/rooms/stats", get(building_stats))
        .route("/rooms/stats/layout", get(layout_stats))
        .route(
            "/rooms/{id}",
            get(get_room).patch(update_room).delete(delete_room),
        )
        .route("/rooms/{id}/meter", put(upsert_meter).get(get_meter))
        // Allotments
        .route(
            "/persons/{id}/allotments",
            post(create_allotment).get(list_allotments_by_person),
        )
        .route("/allotments/{id}", get(get_allotment))
        .route("/allotments/{id}/terminate", patch(terminate_allotment))
        .route("/allotments/{id}/extra", patch(update_extra))
        // Ledger
        .route(
            "/allotments/{id}/rental-details",
            put(upsert_rental_details).get(get_rental_details),
        )
        .route(
            "/persons/{id}/rental-details",
            get(list_rental_details_by_person),
        )
        .route(
            "/allotments/{id}/transactions",
            post(create_transaction).get(list_transactions),
        )
        .route(
            "/persons/{id}/transactions",
            get(list_transactions_by_person),
        )
        // Notices
        .route(
            "/allotments/{id}/notices",
            post(create_notice).get(list_notices),
        )
        .route("/notices/{id}", delete(delete_notice))
        .layer(request_id_layer())
        .with_state(state)
}
