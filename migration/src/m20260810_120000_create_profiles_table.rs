use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profiles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Profiles::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Profiles::FatherName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profiles::Gender).string_len(10).not_null())
                    .col(ColumnDef::new(Profiles::Age).integer().not_null())
                    .col(ColumnDef::new(Profiles::Height).string_len(20).not_null())
                    .col(ColumnDef::new(Profiles::Weight).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Profiles::Complexion)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profiles::Cast).string_len(50).not_null())
                    .col(ColumnDef::new(Profiles::Sect).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Profiles::MaritalStatus)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Profiles::MotherTongue)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profiles::Origin).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Profiles::Education)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Profiles::Occupation)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profiles::Income).string_len(50).not_null())
                    .col(ColumnDef::new(Profiles::Address).string_len(255).not_null())
                    .col(ColumnDef::new(Profiles::City).string_len(100).not_null())
                    .col(ColumnDef::new(Profiles::Country).string_len(100).not_null())
                    .col(ColumnDef::new(Profiles::Brothers).integer().not_null())
                    .col(
                        ColumnDef::new(Profiles::MarriedBrothers)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profiles::Sisters).integer().not_null())
                    .col(
                        ColumnDef::new(Profiles::MarriedSisters)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profiles::FamilyDetails).text().not_null())
                    .col(
                        ColumnDef::new(Profiles::HouseType)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profiles::PhotoUrl).string_len(512))
                    .col(ColumnDef::new(Profiles::PhotoObjectKey).string_len(255))
                    .col(
                        ColumnDef::new(Profiles::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Profiles::MatchedWith).uuid())
                    .col(ColumnDef::new(Profiles::MatchedOn).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Profiles::ShareCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Profiles::Requirements)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing filters always hit gender and status
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_profiles_gender_status
                ON profiles (gender, status);
                "#,
            )
            .await?;

        // Matching scans the opposite gender's active pool
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_profiles_active_by_gender
                ON profiles (gender)
                WHERE status = 'active';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_profiles_created_at
                ON profiles (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_profiles_updated_at
                BEFORE UPDATE ON profiles
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_profiles_updated_at ON profiles")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_profiles_gender_status;
                DROP INDEX IF EXISTS idx_profiles_active_by_gender;
                DROP INDEX IF EXISTS idx_profiles_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    Name,
    FatherName,
    Gender,
    Age,
    Height,
    Weight,
    Complexion,
    Cast,
    Sect,
    MaritalStatus,
    MotherTongue,
    Origin,
    Education,
    Occupation,
    Income,
    Address,
    City,
    Country,
    Brothers,
    MarriedBrothers,
    Sisters,
    MarriedSisters,
    FamilyDetails,
    HouseType,
    PhotoUrl,
    PhotoObjectKey,
    Status,
    MatchedWith,
    MatchedOn,
    ShareCount,
    Requirements,
    CreatedAt,
    UpdatedAt,
}
