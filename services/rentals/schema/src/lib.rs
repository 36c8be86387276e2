//! sea-orm entities for the rentals service.

pub mod addresses;
pub mod contacts;
pub mod docs;
pub mod meter_details;
pub mod notices;
pub mod outbox_events;
pub mod persons;
pub mod rent_transactions;
pub mod rental_details;
pub mod room_allotment_extras;
pub mod room_allotments;
pub mod rooms;
