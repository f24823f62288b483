//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; regenerate with
//! `diesel print-schema` when the migrations change.

diesel::table! {
    /// Registered accounts.
    users (id) {
        id -> Int4,
        #[max_length = 100]
        username -> Varchar,
        #[max_length = 200]
        email -> Varchar,
        #[max_length = 512]
        hashed_password -> Varchar,
    }
}

diesel::table! {
    /// Memos, each owned by exactly one user.
    memo (id) {
        id -> Int4,
        user_id -> Int4,
        #[max_length = 100]
        title -> Varchar,
        #[max_length = 1000]
        content -> Varchar,
    }
}

diesel::joinable!(memo -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(memo, users);
