use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::{Privilege, User};
use crate::oauth::application::domain::entities::{OAuthAccount, OAuthProvider};
use crate::oauth::application::ports::outgoing::{OAuthUserRepository, OAuthUserRepositoryError};
use crate::shared::db::with_timeout;

use super::sea_orm_entity::oauth_accounts::{
    ActiveModel as OAuthAccountActiveModel, Column as OAuthAccountColumn,
    Entity as OAuthAccountEntity,
};

#[derive(Debug, Clone)]
pub struct OAuthUserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    timeout: Duration,
}

impl OAuthUserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    fn map_db_err(e: DbErr) -> OAuthUserRepositoryError {
        OAuthUserRepositoryError::DatabaseError(e.to_string())
    }

    fn to_user(model: UserModel) -> Result<User, OAuthUserRepositoryError> {
        model
            .to_domain()
            .map_err(|e| OAuthUserRepositoryError::CorruptRecord(e.to_string()))
    }

    async fn insert_in_transaction(&self, account: &OAuthAccount) -> Result<UserModel, DbErr> {
        let txn = self.db.begin().await?;

        let user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(account.email.clone()),
            first_name: Set(account.first_name.clone()),
            last_name: Set(account.last_name.clone()),
            privilege: Set(Privilege::Registered.level()),
            registration_date: Set(Utc::now().into()),
            active: Set(true),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let user = match user.insert(&txn).await {
            Ok(user) => user,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e);
            }
        };

        let oauth_account = OAuthAccountActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.id),
            provider_type: Set(account.provider.as_str().to_string()),
            a_id: Set(account.account_id.clone()),
            email: Set(account.email.clone()),
            name: Set(account.name.clone()),
            first_name: Set(account.first_name.clone()),
            last_name: Set(account.last_name.clone()),
            gender: Set(account.gender.code().to_string()),
            picture: Set(account.picture.clone()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        if let Err(e) = oauth_account.insert(&txn).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        txn.commit().await?;

        Ok(user)
    }
}

#[async_trait]
impl OAuthUserRepository for OAuthUserRepositoryPostgres {
    async fn find_user_by_oauth(
        &self,
        provider: OAuthProvider,
        account_id: &str,
    ) -> Result<Option<User>, OAuthUserRepositoryError> {
        let query = UserEntity::find()
            .inner_join(OAuthAccountEntity)
            .filter(OAuthAccountColumn::ProviderType.eq(provider.as_str()))
            .filter(OAuthAccountColumn::AId.eq(account_id));

        let model = with_timeout(self.timeout, query.one(&*self.db))
            .await
            .map_err(Self::map_db_err)?;

        model.map(Self::to_user).transpose()
    }

    async fn insert_user_by_oauth(
        &self,
        account: &OAuthAccount,
    ) -> Result<User, OAuthUserRepositoryError> {
        let user = with_timeout(self.timeout, self.insert_in_transaction(account))
            .await
            .map_err(Self::map_db_err)?;

        Self::to_user(user)
    }

    async fn update_oauth_data(
        &self,
        account: &OAuthAccount,
    ) -> Result<(), OAuthUserRepositoryError> {
        // updated_at is maintained by the table trigger
        let update = OAuthAccountEntity::update_many()
            .col_expr(OAuthAccountColumn::Email, Expr::value(account.email.clone()))
            .col_expr(OAuthAccountColumn::Name, Expr::value(account.name.clone()))
            .col_expr(
                OAuthAccountColumn::FirstName,
                Expr::value(account.first_name.clone()),
            )
            .col_expr(
                OAuthAccountColumn::LastName,
                Expr::value(account.last_name.clone()),
            )
            .col_expr(
                OAuthAccountColumn::Gender,
                Expr::value(account.gender.code()),
            )
            .col_expr(OAuthAccountColumn::Picture, Expr::value(account.picture.clone()))
            .filter(OAuthAccountColumn::ProviderType.eq(account.provider.as_str()))
            .filter(OAuthAccountColumn::AId.eq(account.account_id.as_str()));

        let result = with_timeout(self.timeout, update.exec(&*self.db))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(OAuthUserRepositoryError::AccountNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oauth::adapter::outgoing::sea_orm_entity::oauth_accounts::Model as OAuthAccountModel;
    use crate::oauth::application::domain::entities::Gender;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    // ============================================================
    // Helpers
    // ============================================================

    fn ok_exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    fn account() -> OAuthAccount {
        OAuthAccount {
            provider: OAuthProvider::Facebook,
            account_id: "10001".to_string(),
            email: Some("ada@example.com".to_string()),
            name: Some("Ada Lovelace".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            gender: Gender::Female,
            picture: Some("https://cdn.example.com/ada.jpg".to_string()),
        }
    }

    fn user_model(id: Uuid, privilege: i16) -> UserModel {
        let now = Utc::now().into();
        UserModel {
            id,
            email: Some("ada@example.com".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            privilege,
            registration_date: now,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn oauth_model(user_id: Uuid) -> OAuthAccountModel {
        let now = Utc::now().into();
        OAuthAccountModel {
            id: Uuid::new_v4(),
            user_id,
            provider_type: "facebook".to_string(),
            a_id: "10001".to_string(),
            email: Some("ada@example.com".to_string()),
            name: Some("Ada Lovelace".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            gender: "F".to_string(),
            picture: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn repo(db: DatabaseConnection) -> OAuthUserRepositoryPostgres {
        OAuthUserRepositoryPostgres::new(Arc::new(db), Duration::from_secs(5))
    }

    fn logged_sql(repo: OAuthUserRepositoryPostgres) -> String {
        let db = Arc::try_unwrap(repo.db).unwrap();
        format!("{:?}", db.into_transaction_log())
    }

    // ============================================================
    // find_user_by_oauth
    // ============================================================

    #[tokio::test]
    async fn find_returns_linked_user() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(user_id, 1)]])
            .into_connection();

        let user = repo(db)
            .find_user_by_oauth(OAuthProvider::Facebook, "10001")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, user_id);
        assert_eq!(user.privilege, Privilege::Registered);
    }

    #[tokio::test]
    async fn find_joins_on_provider_and_account_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<UserModel>::new()])
            .into_connection();
        let repo = repo(db);

        let result = repo
            .find_user_by_oauth(OAuthProvider::Facebook, "10001")
            .await
            .unwrap();
        assert!(result.is_none());

        let sql = logged_sql(repo);
        assert!(sql.contains("INNER JOIN"));
        assert!(sql.contains("oauth_accounts"));
        assert!(sql.contains("\\\"type\\\""));
        assert!(sql.contains("a_id"));
    }

    #[tokio::test]
    async fn find_rejects_unknown_privilege() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(Uuid::new_v4(), 4)]])
            .into_connection();

        let result = repo(db)
            .find_user_by_oauth(OAuthProvider::Facebook, "10001")
            .await;

        assert!(matches!(
            result,
            Err(OAuthUserRepositoryError::CorruptRecord(_))
        ));
    }

    #[tokio::test]
    async fn find_maps_db_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let result = repo(db)
            .find_user_by_oauth(OAuthProvider::Facebook, "10001")
            .await;

        match result {
            Err(OAuthUserRepositoryError::DatabaseError(msg)) => {
                assert!(msg.contains("connection reset"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    // ============================================================
    // insert_user_by_oauth
    // ============================================================

    #[tokio::test]
    async fn insert_creates_user_and_account_in_one_transaction() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(user_id, 1)]])
            .append_query_results([vec![oauth_model(user_id)]])
            .into_connection();
        let repo = repo(db);

        let user = repo.insert_user_by_oauth(&account()).await.unwrap();

        assert_eq!(user.id, user_id);
        assert_eq!(user.first_name.as_deref(), Some("Ada"));

        let statements = logged_sql(repo);
        assert!(statements.contains("INSERT INTO \\\"users\\\""));
        assert!(statements.contains("INSERT INTO \\\"oauth_accounts\\\""));
    }

    #[tokio::test]
    async fn insert_failure_of_account_row_is_reported() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(user_id, 1)]])
            .append_query_errors([DbErr::Custom("duplicate key".to_string())])
            .into_connection();

        let result = repo(db).insert_user_by_oauth(&account()).await;

        assert!(matches!(
            result,
            Err(OAuthUserRepositoryError::DatabaseError(_))
        ));
    }

    // ============================================================
    // update_oauth_data
    // ============================================================

    #[tokio::test]
    async fn update_overwrites_profile_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(1)])
            .into_connection();
        let repo = repo(db);

        repo.update_oauth_data(&account()).await.unwrap();

        let sql = logged_sql(repo);
        assert!(sql.contains("UPDATE \\\"oauth_accounts\\\""));
        assert!(sql.contains("ada@example.com"));
    }

    #[tokio::test]
    async fn update_of_missing_account_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let result = repo(db).update_oauth_data(&account()).await;

        assert_eq!(result, Err(OAuthUserRepositoryError::AccountNotFound));
    }
}
