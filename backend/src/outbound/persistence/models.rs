//! Diesel row structs bridging the SQL schema and domain types.
//!
//! These are internal to the persistence layer; repositories translate them
//! to and from domain types at the boundary.

use diesel::prelude::*;

use crate::domain::{Memo, MemoId, NewMemo, NewUser, User, UserId, Username};

use super::schema::{memo, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
}

impl UserRow {
    /// Convert a stored row into a domain user.
    ///
    /// Rows come from migrations that enforce the same username constraints,
    /// so a failure here indicates out-of-band data corruption.
    pub fn into_domain(self) -> Result<User, crate::domain::UserValidationError> {
        let username = Username::new(self.username)?;
        Ok(User::new(
            UserId::new(self.id),
            username,
            self.email,
            self.hashed_password,
        ))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub username: String,
    pub email: String,
    pub hashed_password: String,
}

impl From<&NewUser> for NewUserRow {
    fn from(user: &NewUser) -> Self {
        Self {
            username: user.username.as_ref().to_owned(),
            email: user.email.clone(),
            hashed_password: user.hashed_password.clone(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = memo)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MemoRow {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
}

impl From<MemoRow> for Memo {
    fn from(row: MemoRow) -> Self {
        Self {
            id: MemoId::new(row.id),
            user_id: UserId::new(row.user_id),
            title: row.title,
            content: row.content,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = memo)]
pub struct NewMemoRow {
    pub user_id: i32,
    pub title: String,
    pub content: String,
}

impl From<&NewMemo> for NewMemoRow {
    fn from(memo: &NewMemo) -> Self {
        Self {
            user_id: memo.user_id.as_i32(),
            title: memo.title.clone(),
            content: memo.content.clone(),
        }
    }
}

/// Partial update changeset; `None` fields are left untouched.
///
/// Callers must not build an all-`None` changeset: Diesel rejects an UPDATE
/// with no assignments. The service layer guards that case.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = memo)]
pub struct MemoChangeset {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<&crate::domain::MemoPatch> for MemoChangeset {
    fn from(patch: &crate::domain::MemoPatch) -> Self {
        Self {
            title: patch.title().map(str::to_owned),
            content: patch.content().map(str::to_owned),
        }
    }
}
