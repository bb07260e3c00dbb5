use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub fullname: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorites_people::Entity")]
    FavoritesPeople,
    #[sea_orm(has_many = "super::favorites_planets::Entity")]
    FavoritesPlanets,
}

impl Related<super::favorites_people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritesPeople.def()
    }
}

impl Related<super::favorites_planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritesPlanets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
