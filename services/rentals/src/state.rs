use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use rentman_domain::clock::Clock;

use crate::infra::db::{
    DbAllotmentRepository, DbLedgerRepository, DbNoticeRepository, DbOutboxRepository,
    DbPersonRepository, DbProfileRepository, DbRoomRepository,
};
use crate::infra::receipt::HtmlReceiptStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub clock: Arc<dyn Clock>,
    pub media_root: PathBuf,
}

impl AppState {
    pub fn person_repo(&self) -> DbPersonRepository {
        DbPersonRepository {
            db: self.db.clone(),
        }
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn room_repo(&self) -> DbRoomRepository {
        DbRoomRepository {
            db: self.db.clone(),
        }
    }

    pub fn allotment_repo(&self) -> DbAllotmentRepository {
        DbAllotmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn ledger_repo(&self) -> DbLedgerRepository {
        DbLedgerRepository {
            db: self.db.clone(),
        }
    }

    pub fn notice_repo(&self) -> DbNoticeRepository {
        DbNoticeRepository {
            db: self.db.clone(),
        }
    }

    pub fn outbox_repo(&self) -> DbOutboxRepository {
        DbOutboxRepository {
            db: self.db.clone(),
        }
    }

    pub fn receipt_store(&self) -> HtmlReceiptStore {
        HtmlReceiptStore {
            media_root: self.media_root.clone(),
        }
    }
}
