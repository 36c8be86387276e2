pub mod allotment;
pub mod ledger;
pub mod notice;
pub mod person;
pub mod profile;
pub mod room;
