use sea_orm::entity::prelude::*;

/// Free-form notice tied to an allotment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub allotment_id: i64,
    pub code: String,
    pub description: Option<String>,
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
