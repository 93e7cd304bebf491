//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered accounts. `email` is unique.
    users (id) {
        id -> Uuid,
        email -> Varchar,
        username -> Varchar,
        password_hash -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Category tree. `parent_id` is not a foreign key.
    categories (id) {
        id -> Uuid,
        name -> Text,
        parent_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Blog posts. Soft-deleted rows keep their data with `deleted_at` set.
    posts (id) {
        id -> Uuid,
        title -> Text,
        description -> Text,
        status -> Varchar,
        is_active -> Bool,
        /// `ON DELETE SET NULL` reference to `categories.id`.
        category_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Comments on posts.
    comments (id) {
        id -> Uuid,
        post_id -> Uuid,
        text -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Replies to comments.
    replies (id) {
        id -> Uuid,
        comment_id -> Uuid,
        text -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::joinable!(posts -> categories (category_id));
diesel::joinable!(comments -> posts (post_id));
diesel::joinable!(replies -> comments (comment_id));

diesel::allow_tables_to_appear_in_same_query!(users, categories, posts, comments, replies);
