use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub hourly_rate: f64,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hour_entries::Entity")]
    HourEntries,
}

impl Related<super::hour_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HourEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
