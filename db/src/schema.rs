table! {
    questions (id) {
        id -> Int4,
        question_text -> Text,
        pub_date -> Timestamptz,
        end_date -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
