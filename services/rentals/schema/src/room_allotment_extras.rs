use sea_orm::entity::prelude::*;

/// Auxiliary flags created automatically with each allotment
/// (get-or-create; never created independently).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room_allotment_extras")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub allotment_id: i64,
    pub agg_available: bool,
    pub is_painted: bool,
    pub is_water_tank: bool,
    pub is_grill: bool,
    pub is_ele_bill_clear: bool,
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
