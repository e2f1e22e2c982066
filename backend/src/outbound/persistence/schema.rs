//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Member accounts.
    users (id) {
        id -> Int8,
        username -> Varchar,
        email -> Varchar,
        /// PHC-encoded Argon2id hash.
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Opaque bearer tokens; at most one per user by application policy.
    auth_tokens (key) {
        key -> Varchar,
        user_id -> Int8,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    events (id) {
        id -> Int8,
        title_en -> Varchar,
        title_ja -> Varchar,
        description_en -> Text,
        description_ja -> Text,
        start_datetime -> Timestamptz,
        location -> Varchar,
        /// `NULL` means unlimited.
        capacity -> Nullable<Int4>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    event_images (id) {
        id -> Int8,
        event_id -> Int8,
        image -> Varchar,
        caption_en -> Varchar,
        caption_ja -> Varchar,
        sort_order -> Int4,
    }
}

diesel::table! {
    /// Registrations, unique per `(user_id, event_id)`.
    event_registrations (id) {
        id -> Int8,
        user_id -> Int8,
        event_id -> Int8,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    mission_pages (id) {
        id -> Int8,
        title_en -> Varchar,
        title_ja -> Varchar,
        body_en -> Text,
        body_ja -> Text,
        hero_image -> Nullable<Varchar>,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    cleaning_service_pages (id) {
        id -> Int8,
        title_en -> Varchar,
        title_ja -> Varchar,
        description_en -> Text,
        description_ja -> Text,
        cta_en -> Varchar,
        cta_ja -> Varchar,
        image -> Nullable<Varchar>,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    cleaning_features (id) {
        id -> Int8,
        page_id -> Int8,
        text_en -> Varchar,
        text_ja -> Varchar,
        color -> Varchar,
        sort_order -> Int4,
    }
}

diesel::table! {
    cleaning_gallery_images (id) {
        id -> Int8,
        page_id -> Int8,
        image -> Varchar,
        caption_en -> Varchar,
        caption_ja -> Varchar,
        sort_order -> Int4,
    }
}

diesel::table! {
    events_page_settings (id) {
        id -> Int8,
        title_en -> Varchar,
        title_ja -> Varchar,
        subtitle_en -> Text,
        subtitle_ja -> Text,
        hero_image -> Nullable<Varchar>,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    event_placeholders (id) {
        id -> Int8,
        page_id -> Int8,
        title_en -> Varchar,
        title_ja -> Varchar,
        description_en -> Text,
        description_ja -> Text,
        image -> Nullable<Varchar>,
        cta_label_en -> Varchar,
        cta_label_ja -> Varchar,
        cta_url -> Varchar,
        sort_order -> Int4,
        active -> Bool,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// UI strings, unique per `(namespace, key, language)`.
    translatable_strings (id) {
        id -> Int8,
        namespace -> Varchar,
        key -> Varchar,
        language -> Varchar,
        text -> Text,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    site_text_settings (id) {
        id -> Int8,
        home_label_en -> Varchar,
        home_label_ja -> Varchar,
        events_label_en -> Varchar,
        events_label_ja -> Varchar,
        cleaning_label_en -> Varchar,
        cleaning_label_ja -> Varchar,
        cleaning_short_en -> Varchar,
        cleaning_short_ja -> Varchar,
        login_en -> Varchar,
        login_ja -> Varchar,
        register_en -> Varchar,
        register_ja -> Varchar,
        logout_en -> Varchar,
        logout_ja -> Varchar,
        browse_events_en -> Varchar,
        browse_events_ja -> Varchar,
        learn_more_en -> Varchar,
        learn_more_ja -> Varchar,
        instagram_url -> Varchar,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    contact_messages (id) {
        id -> Int8,
        name -> Varchar,
        email -> Varchar,
        message -> Text,
        sent_at -> Timestamptz,
    }
}

diesel::table! {
    volunteer_groups (id) {
        id -> Int8,
        name -> Varchar,
        description -> Text,
        logo -> Nullable<Varchar>,
        active -> Bool,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    volunteer_memberships (id) {
        id -> Int8,
        user_id -> Int8,
        group_id -> Int8,
        role -> Varchar,
        added_at -> Timestamptz,
    }
}

diesel::joinable!(auth_tokens -> users (user_id));
diesel::joinable!(event_images -> events (event_id));
diesel::joinable!(event_registrations -> events (event_id));
diesel::joinable!(event_registrations -> users (user_id));
diesel::joinable!(cleaning_features -> cleaning_service_pages (page_id));
diesel::joinable!(cleaning_gallery_images -> cleaning_service_pages (page_id));
diesel::joinable!(event_placeholders -> events_page_settings (page_id));
diesel::joinable!(volunteer_memberships -> users (user_id));
diesel::joinable!(volunteer_memberships -> volunteer_groups (group_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    auth_tokens,
    events,
    event_images,
    event_registrations,
    mission_pages,
    cleaning_service_pages,
    cleaning_features,
    cleaning_gallery_images,
    events_page_settings,
    event_placeholders,
    translatable_strings,
    site_text_settings,
    contact_messages,
    volunteer_groups,
    volunteer_memberships,
);
