// Each table lives in its own database file; see `pool::CacheStore`.

diesel::table! {
    payment_method (user_id, name) {
        user_id -> Text,
        name -> Text,
        active -> Bool,
        position -> Integer,
    }
}

diesel::table! {
    category (user_id, id) {
        user_id -> Text,
        id -> Text,
        name -> Text,
        kind -> Text,
        color -> Text,
        icon -> Text,
        position -> Integer,
    }
}

diesel::table! {
    user_nickname (user_id) {
        user_id -> Text,
        nickname -> Text,
        position -> Integer,
    }
}

diesel::table! {
    vehicle (user_id, plate) {
        user_id -> Text,
        plate -> Text,
        model -> Text,
        year -> Integer,
        fuel_type -> Text,
        owned -> Bool,
        position -> Integer,
    }
}

diesel::table! {
    fuel_record (user_id, id) {
        user_id -> Text,
        id -> Text,
        station -> Text,
        fuel_type -> Text,
        liters -> Double,
        price_per_liter -> Double,
        odometer_km -> BigInt,
        filled_at -> Text,
        position -> Integer,
    }
}
