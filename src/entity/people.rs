use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorites_people::Entity")]
    FavoritesPeople,
}

impl Related<super::favorites_people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritesPeople.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
