use sea_orm::entity::prelude::*;

/// Physical unit in a managed building. `room_code` and `code_name` are
/// derived from `room_no` + `building` and recomputed on every write.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub room_no: i32,
    pub floor_no: i16,
    pub address: Option<String>,
    pub building: String,
    #[sea_orm(unique)]
    pub room_code: String,
    #[sea_orm(unique)]
    pub code_name: String,
    pub area: Option<i32>,
    pub layout: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_allotments::Entity")]
    RoomAllotments,
    #[sea_orm(has_many = "super::meter_details::Entity")]
    MeterDetails,
}

impl Related<super::room_allotments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomAllotments.def()
    }
}

impl Related<super::meter_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeterDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
