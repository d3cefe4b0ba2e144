// Table definition for the content history store.

diesel::table! {
    content_history (id) {
        id -> Int4,
        topic -> Text,
        category -> Text,
        master_storyline -> Text,
        youtube_script -> Text,
        instagram_script -> Text,
        twitter_thread -> Jsonb,
        caption -> Text,
        cta -> Jsonb,
        hashtags -> Jsonb,
        created_at -> Timestamptz,
    }
}
