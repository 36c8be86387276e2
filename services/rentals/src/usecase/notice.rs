use std::sync::Arc;

use rentman_domain::clock::Clock;

use crate::domain::repository::{AllotmentRepository, NoticeRepository};
use crate::domain::types::{NewNotice, Notice};
use crate::error::RentalsServiceError;

// ── CreateNotice ─────────────────────────────────────────────────────────────

pub struct CreateNoticeUseCase<A: AllotmentRepository, N: NoticeRepository> {
    pub allotments: A,
    pub repo: N,
    pub clock: Arc<dyn Clock>,
}

impl<A: AllotmentRepository, N: NoticeRepository> CreateNoticeUseCase<A, N> {
    pub async fn execute(
        &self,
        allotment_id: i64,
        input: NewNotice,
    ) -> Result<Notice, RentalsServiceError> {
        if self.allotments.find_by_id(allotment_id).await?.is_none() {
            return Err(RentalsServiceError::AllotmentNotFound);
        }
        self.repo
            .create(
                allotment_id,
                input.code.as_str(),
                input.description.as_deref(),
                self.clock.now(),
            )
            .await
    }
}

// ── ListNotices ──────────────────────────────────────────────────────────────

pub struct ListNoticesUseCase<A: AllotmentRepository, N: NoticeRepository> {
    pub allotments: A,
    pub repo: N,
}

impl<A: AllotmentRepository, N: NoticeRepository> ListNoticesUseCase<A, N> {
    pub async fn execute(&self, allotment_id: i64) -> Result<Vec<Notice>, RentalsServiceError> {
        if self.allotments.find_by_id(allotment_id).await?.is_none() {
            return Err(RentalsServiceError::AllotmentNotFound);
        }
        self.repo.list_by_allotment(allotment_id).await
    }
}

// ── DeleteNotice ─────────────────────────────────────────────────────────────

pub struct DeleteNoticeUseCase<N: NoticeRepository> {
    pub repo: N,
}

impl<N: NoticeRepository> DeleteNoticeUseCase<N> {
    pub async fn execute(&self, notice_id: i64) -> Result<(), RentalsServiceError> {
        if self.repo.delete(notice_id).await? {
            Ok(())
        } else {
            Err(RentalsServiceError::NoticeNotFound)
        }
    }
}
