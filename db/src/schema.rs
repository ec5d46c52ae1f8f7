diesel::table! {
    games (id) {
        id -> Integer,
        title -> Text,
        date -> Text,
        time -> Text,
        location -> Text,
        cost -> Double,
        max_players -> Integer,
    }
}

diesel::table! {
    signups (id) {
        id -> Integer,
        game_id -> Integer,
        name -> Text,
        position -> Text,
        age -> Integer,
        speed -> Integer,
        passing -> Integer,
        shooting -> Integer,
        defending -> Integer,
        paid -> Bool,
        signup_time -> Timestamp,
    }
}

diesel::joinable!(signups -> games (game_id));

diesel::allow_tables_to_appear_in_same_query!(games, signups,);
