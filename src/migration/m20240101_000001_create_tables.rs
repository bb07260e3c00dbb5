use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Fullname).string_len(120).not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string_len(130).not_null())
                    .col(ColumnDef::new(Users::IsActive).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(People::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(People::Name).string_len(80).not_null())
                    .col(ColumnDef::new(People::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planets::Name).string_len(80).not_null())
                    .col(ColumnDef::new(Planets::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FavoritesPeople::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoritesPeople::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FavoritesPeople::UserId).integer().not_null())
                    .col(ColumnDef::new(FavoritesPeople::PeopleId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_people_user")
                            .from(FavoritesPeople::Table, FavoritesPeople::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_people_people")
                            .from(FavoritesPeople::Table, FavoritesPeople::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_favorites_people_user_people")
                    .table(FavoritesPeople::Table)
                    .col(FavoritesPeople::UserId)
                    .col(FavoritesPeople::PeopleId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FavoritesPlanets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoritesPlanets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FavoritesPlanets::UserId).integer().not_null())
                    .col(ColumnDef::new(FavoritesPlanets::PlanetId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planets_user")
                            .from(FavoritesPlanets::Table, FavoritesPlanets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planets_planet")
                            .from(FavoritesPlanets::Table, FavoritesPlanets::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_favorites_planets_user_planet")
                    .table(FavoritesPlanets::Table)
                    .col(FavoritesPlanets::UserId)
                    .col(FavoritesPlanets::PlanetId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Edge tables first so the foreign keys never dangle.
        manager
            .drop_table(Table::drop().table(FavoritesPlanets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FavoritesPeople::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Fullname,
    Email,
    Password,
    IsActive,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum FavoritesPeople {
    Table,
    Id,
    UserId,
    PeopleId,
}

#[derive(DeriveIden)]
enum FavoritesPlanets {
    Table,
    Id,
    UserId,
    PlanetId,
}
