use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create oauth_accounts table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(OauthAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OauthAccounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(OauthAccounts::UserId).uuid().not_null())
                    .col(ColumnDef::new(OauthAccounts::Type).string_len(16).not_null())
                    .col(ColumnDef::new(OauthAccounts::AId).string_len(128).not_null())
                    .col(ColumnDef::new(OauthAccounts::Email).string_len(255))
                    .col(ColumnDef::new(OauthAccounts::Name).string_len(255))
                    .col(ColumnDef::new(OauthAccounts::FirstName).string_len(100))
                    .col(ColumnDef::new(OauthAccounts::LastName).string_len(100))
                    .col(
                        ColumnDef::new(OauthAccounts::Gender)
                            .string_len(1)
                            .not_null()
                            .default("U"),
                    )
                    .col(ColumnDef::new(OauthAccounts::Picture).text())
                    .col(
                        ColumnDef::new(OauthAccounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(OauthAccounts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_oauth_accounts_user_id")
                            .from(OauthAccounts::Table, OauthAccounts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // One local account per provider account
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_oauth_accounts_type_a_id
                ON oauth_accounts (type, a_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_oauth_accounts_user_id
                ON oauth_accounts (user_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_oauth_accounts_updated_at
                BEFORE UPDATE ON oauth_accounts
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
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_oauth_accounts_updated_at ON oauth_accounts;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_oauth_accounts_type_a_id;
                DROP INDEX IF EXISTS idx_oauth_accounts_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OauthAccounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OauthAccounts {
    Table,
    Id,
    UserId,
    Type,
    AId,
    Email,
    Name,
    FirstName,
    LastName,
    Gender,
    Picture,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
