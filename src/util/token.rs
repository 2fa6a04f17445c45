//! Share token generation.

use rand::{distr::Alphanumeric, Rng};

/// Length of generated view share tokens.
pub const VIEW_TOKEN_LENGTH: usize = 32;

/// Generates a random alphanumeric view share token.
///
/// Tokens are only unique with overwhelming probability, callers insert them under the
/// unique index on `estimate_view.token` and retry on conflict.
pub fn generate_view_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(VIEW_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
