use sea_orm::entity::prelude::*;

/// Assignment of a room to a person for a bounded period.
///
/// At most one row per room may have `is_active = true`; the repository
/// enforces this under a row lock on the room.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room_allotments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub person_id: i64,
    pub room_id: i64,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub actual_end_date: Option<chrono::NaiveDate>,
    pub is_active: bool,
    pub ts: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::persons::Entity",
        from = "Column::PersonId",
        to = "super::persons::Column::Id"
    )]
    Person,
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::Id"
    )]
    Room,
    #[sea_orm(has_many = "super::room_allotment_extras::Entity")]
    Extras,
    #[sea_orm(has_many = "super::rental_details::Entity")]
    RentalDetails,
    #[sea_orm(has_many = "super::rent_transactions::Entity")]
    Transactions,
    #[sea_orm(has_many = "super::notices::Entity")]
    Notices,
}

impl Related<super::persons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::room_allotment_extras::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Extras.def()
    }
}

impl Related<super::rental_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RentalDetails.def()
    }
}

impl Related<super::rent_transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl Related<super::notices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
