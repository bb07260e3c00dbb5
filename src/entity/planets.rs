use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorites_planets::Entity")]
    FavoritesPlanets,
}

impl Related<super::favorites_planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritesPlanets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
