//! PostgreSQL-backed `MemoRepository` implementation using Diesel ORM.
//!
//! Every lookup and mutation filters on both the memo id and the owner id,
//! so a memo belonging to another user is indistinguishable from a missing
//! one at this layer.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{MemoRepository, MemoRepositoryError};
use crate::domain::{Memo, MemoId, MemoPatch, NewMemo, UserId};

use super::models::{MemoChangeset, MemoRow, NewMemoRow};
use super::pool::{DbPool, PoolError};
use super::schema::memo;

/// Diesel-backed implementation of the `MemoRepository` port.
#[derive(Clone)]
pub struct DieselMemoRepository {
    pool: DbPool,
}

impl DieselMemoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MemoRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            MemoRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> MemoRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(%other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            MemoRepositoryError::connection("database connection error")
        }
        _ => MemoRepositoryError::query("database error"),
    }
}

#[async_trait]
impl MemoRepository for DieselMemoRepository {
    async fn insert(&self, memo: &NewMemo) -> Result<Memo, MemoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: MemoRow = diesel::insert_into(memo::table)
            .values(NewMemoRow::from(memo))
            .returning(MemoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_all_by_owner(&self, owner: UserId) -> Result<Vec<Memo>, MemoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MemoRow> = memo::table
            .filter(memo::user_id.eq(owner.as_i32()))
            .order(memo::id.asc())
            .select(MemoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Memo::from).collect())
    }

    async fn find_by_id_and_owner(
        &self,
        id: MemoId,
        owner: UserId,
    ) -> Result<Option<Memo>, MemoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<MemoRow> = memo::table
            .filter(memo::id.eq(id.as_i32()))
            .filter(memo::user_id.eq(owner.as_i32()))
            .select(MemoRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Memo::from))
    }

    async fn update(
        &self,
        id: MemoId,
        owner: UserId,
        patch: &MemoPatch,
    ) -> Result<Option<Memo>, MemoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<MemoRow> = diesel::update(
            memo::table
                .filter(memo::id.eq(id.as_i32()))
                .filter(memo::user_id.eq(owner.as_i32())),
        )
        .set(MemoChangeset::from(patch))
        .returning(MemoRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;

        Ok(row.map(Memo::from))
    }

    async fn delete(&self, id: MemoId, owner: UserId) -> Result<bool, MemoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            memo::table
                .filter(memo::id.eq(id.as_i32()))
                .filter(memo::user_id.eq(owner.as_i32())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
