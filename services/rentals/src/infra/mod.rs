pub mod db;
pub mod outbox;
pub mod receipt;
