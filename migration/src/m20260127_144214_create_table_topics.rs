use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create topics table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Topics::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Topics::Slug).string_len(255).not_null())
                    .col(ColumnDef::new(Topics::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Topics::ShortTitle).string_len(255))
                    .col(ColumnDef::new(Topics::Subtitle).string_len(255))
                    .col(
                        ColumnDef::new(Topics::State)
                            .string_len(32)
                            .not_null()
                            .default("draft"),
                    )
                    .col(ColumnDef::new(Topics::Description).text())
                    .col(ColumnDef::new(Topics::TeamDescription).text())
                    .col(ColumnDef::new(Topics::OgTitle).string_len(255))
                    .col(ColumnDef::new(Topics::OgDescription).text())
                    .col(ColumnDef::new(Topics::OgImage).text())
                    .col(ColumnDef::new(Topics::LeadingImage).text())
                    .col(ColumnDef::new(Topics::LeadingImagePortrait).text())
                    .col(ColumnDef::new(Topics::LeadingVideo).text())
                    .col(ColumnDef::new(Topics::Headline).text())
                    .col(ColumnDef::new(Topics::TitlePosition).string_len(32))
                    .col(
                        ColumnDef::new(Topics::Relateds)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Topics::RelatedsBackground).text())
                    .col(ColumnDef::new(Topics::PublishedDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Topics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Topics::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_topics_slug_unique
                ON topics (slug);
                "#,
            )
            .await?;

        // Default listing order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topics_published_date
                ON topics (published_date DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topics_state
                ON topics (state);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger (reuse same function pattern)
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_topics_updated_at
                BEFORE UPDATE ON topics
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
                DROP TRIGGER IF EXISTS update_topics_updated_at ON topics;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_topics_slug_unique;
                DROP INDEX IF EXISTS idx_topics_published_date;
                DROP INDEX IF EXISTS idx_topics_state;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
    Slug,
    Title,
    ShortTitle,
    Subtitle,
    State,
    Description,
    TeamDescription,
    OgTitle,
    OgDescription,
    OgImage,
    LeadingImage,
    LeadingImagePortrait,
    LeadingVideo,
    Headline,
    TitlePosition,
    Relateds,
    RelatedsBackground,
    PublishedDate,
    CreatedAt,
    UpdatedAt,
}
