use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use rentman_domain::types::NoticeType;

use crate::domain::types::{NewNotice, Notice};
use crate::error::RentalsServiceError;
use crate::state::AppState;
use crate::usecase::notice::{CreateNoticeUseCase, DeleteNoticeUseCase, ListNoticesUseCase};

#[derive(Serialize)]
pub struct NoticeResponse {
    pub id: i64,
    pub allotment_id: i64,
    pub code: NoticeType,
    pub description: Option<String>,
    #[serde(serialize_with = "rentman_core::serde::to_rfc3339_ms")]
    pub ts: chrono::DateTime<chrono::Utc>,
}

impl From<Notice> for NoticeResponse {
    fn from(notice: Notice) -> Self {
        Self {
            id: notice.id,
            allotment_id: notice.allotment_id,
            code: notice.code,
            description: notice.description,
            ts: notice.ts,
        }
    }
}

// ── POST /allotments/{id}/notices ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateNoticeRequest {
    pub code: Option<NoticeType>,
    pub description: Option<String>,
}

pub async fn create_notice(
    State(state): State<AppState>,
    Path(allotment_id): Path<i64>,
    Json(body): Json<CreateNoticeRequest>,
) -> Result<(StatusCode, Json<NoticeResponse>), RentalsServiceError> {
    let usecase = CreateNoticeUseCase {
        allotments: state.allotment_repo(),
        repo: state.notice_repo(),
        clock: state.clock.clone(),
    };
    let notice = usecase
        .execute(
            allotment_id,
            NewNotice {
                code: body.code.unwrap_or_default(),
                description: body.description,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(notice.into())))
}

// ── GET /allotments/{id}/notices ─────────────────────────────────────────────

pub async fn list_notices(
    State(state): State<AppState>,
    Path(allotment_id): Path<i64>,
) -> Result<Json<Vec<NoticeResponse>>, RentalsServiceError> {
    let usecase = ListNoticesUseCase {
        allotments: state.allotment_repo(),
        repo: state.notice_repo(),
    };
    let notices = usecase.execute(allotment_id).await?;
    Ok(Json(notices.into_iter().map(Into::into).collect()))
}

// ── DELETE /notices/{id} ─────────────────────────────────────────────────────

pub async fn delete_notice(
    State(state): State<AppState>,
    Path(notice_id): Path<i64>,
) -> Result<StatusCode, RentalsServiceError> {
    let usecase = DeleteNoticeUseCase {
        repo: state.notice_repo(),
    };
    usecase.execute(notice_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
