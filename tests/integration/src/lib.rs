//! End-to-end tests for MiniStack init-data verification.
//!
//! The helpers here build signed payloads through the crate's own public
//! signing primitives, so every test exercises the same canonicalization and
//! keyed-hash chain the verifier checks against.

use std::collections::BTreeMap;
use std::sync::Once;

use ministack_auth::{BotToken, build_data_check_string, compute_signature, derive_signing_key};
use ministack_model::TelegramUser;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// The bot token used for locally built payloads.
pub const TEST_BOT_TOKEN: &str = "123456789:ABCdefGHIjklMNOpqrsTUVwxyz";

/// Default query ID for locally built payloads.
pub const TEST_QUERY_ID: &str = "AAHdF6IQAAAAAN0XohDhrOrc";

/// The test bot token, wrapped.
#[must_use]
pub fn test_token() -> BotToken {
    init_tracing();
    BotToken::new(TEST_BOT_TOKEN).expect("test token is non-empty")
}

/// A user with the common optional fields set.
#[must_use]
pub fn basic_user() -> TelegramUser {
    TelegramUser {
        id: 279_058_397,
        first_name: "Vladislav".to_owned(),
        last_name: Some("Kibenko".to_owned()),
        username: Some("vdkfrost".to_owned()),
        language_code: Some("ru".to_owned()),
        is_premium: None,
    }
}

/// A user with only the mandatory fields.
#[must_use]
pub fn minimal_user() -> TelegramUser {
    TelegramUser {
        id: 123_456_789,
        first_name: "John".to_owned(),
        last_name: None,
        username: None,
        language_code: None,
        is_premium: None,
    }
}

/// A premium-flagged user.
#[must_use]
pub fn premium_user() -> TelegramUser {
    TelegramUser {
        id: 987_654_321,
        first_name: "Alice".to_owned(),
        last_name: Some("Smith".to_owned()),
        username: Some("alice_smith".to_owned()),
        language_code: Some("en".to_owned()),
        is_premium: Some(true),
    }
}

/// A user with non-ASCII names.
#[must_use]
pub fn unicode_user() -> TelegramUser {
    TelegramUser {
        id: 555_666_777,
        first_name: "Алексей".to_owned(),
        last_name: Some("Петров".to_owned()),
        username: Some("alexey_petrov".to_owned()),
        language_code: Some("ru".to_owned()),
        is_premium: None,
    }
}

/// Build a correctly signed init-data string from raw (key, value) pairs.
///
/// The pairs are serialized in the order given; the signature over the
/// canonical ordering is appended as the final `hash` field.
#[must_use]
pub fn sign_pairs(pairs: &[(&str, &str)], token: &BotToken) -> String {
    let fields: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    let data_check_string = build_data_check_string(&fields);
    let hash = compute_signature(&derive_signing_key(token), &data_check_string);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        serializer.append_pair(k, v);
    }
    serializer.append_pair("hash", &hash);
    serializer.finish()
}

/// Build a correctly signed init-data string for a user.
#[must_use]
pub fn build_init_data(
    user: &TelegramUser,
    query_id: &str,
    token: &BotToken,
    auth_date: i64,
) -> String {
    let user_json = serde_json::to_string(user).expect("user serializes");
    let auth_date = auth_date.to_string();
    sign_pairs(
        &[
            ("query_id", query_id),
            ("user", &user_json),
            ("auth_date", &auth_date),
        ],
        token,
    )
}

mod test_batch;
