use sea_orm::entity::prelude::*;

/// Deposit/rent/maintenance amounts for an allotment. `rent_total` is
/// derived at the write boundary, never accepted from the client.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rental_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub allotment_id: i64,
    pub deposit: i64,
    pub rent: i64,
    pub maintenance: i64,
    pub rent_total: i64,
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
