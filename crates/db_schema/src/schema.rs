diesel::table! {
    community (id) {
        id -> Text,
        name -> Text,
        username -> Text,
        image -> Nullable<Text>,
        bio -> Nullable<Text>,
        published -> Timestamptz,
    }
}

diesel::table! {
    community_member (community_id, person_id) {
        community_id -> Text,
        person_id -> Text,
        published -> Timestamptz,
    }
}

diesel::table! {
    person (id) {
        id -> Text,
        name -> Text,
        username -> Text,
        bio -> Nullable<Text>,
        avatar -> Nullable<Text>,
        onboarded -> Bool,
        published -> Timestamptz,
    }
}

diesel::table! {
    thread (id) {
        id -> Int4,
        content -> Text,
        creator_id -> Text,
        parent_id -> Nullable<Int4>,
        community_id -> Nullable<Text>,
        published -> Timestamptz,
    }
}

diesel::table! {
    thread_like (thread_id, person_id) {
        thread_id -> Int4,
        person_id -> Text,
        published -> Timestamptz,
    }
}

diesel::joinable!(thread -> person (creator_id));
diesel::joinable!(thread -> community (community_id));
diesel::joinable!(thread_like -> thread (thread_id));
diesel::joinable!(thread_like -> person (person_id));
diesel::joinable!(community_member -> community (community_id));
diesel::joinable!(community_member -> person (person_id));

diesel::allow_tables_to_appear_in_same_query!(
  community,
  community_member,
  person,
  thread,
  thread_like
);
