use sea_orm::entity::prelude::*;

/// Payment event against an allotment. `tnx_no` is generated server-side on
/// every insert; the unique constraint is the uniqueness guarantee and a
/// violation is retryable.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rent_transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub tnx_no: String,
    pub allotment_id: i64,
    pub amount: i64,
    pub is_rent: bool,
    pub payment_mode: String,
    pub comment: Option<String>,
    pub receipt: Option<String>,
    pub ts: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room_allotments::Entity",
        from = "Column::AllotmentId",
        to = "super::room_allotments::Column::Id"
    )]
    Allotment,
}

impl Related<super::room_allotments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Allotment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
