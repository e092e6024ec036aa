//! Restock determination and pre-save normalization
//!
//! One rule, three write paths: create and field updates run the
//! [`normalize`] hook before every save, while the flag-override path
//! bypasses it so an operator can pin `need_restock` by hand.

use serde_json::Value;
use thiserror::Error;

use crate::models::Product;

/// Default fraction of total stock below which availability is flagged low
pub const DEFAULT_RESTOCK_THRESHOLD: f64 = 0.2;

/// Accepted truthy string tokens for the restock-flag override
const TRUE_TOKENS: [&str; 4] = ["true", "1", "yes", "y"];
/// Accepted falsy string tokens for the restock-flag override
const FALSE_TOKENS: [&str; 4] = ["false", "0", "no", "n"];

/// Process-wide restock policy, resolved once at startup and read-only after
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestockPolicy {
    threshold: f64,
}

/// Rejected threshold values (outside the `(0, 1]` fraction range)
#[derive(Debug, Error, PartialEq)]
#[error("restock threshold must be a fraction in (0, 1], got {0}")]
pub struct InvalidThreshold(pub f64);

impl RestockPolicy {
    /// Build a policy, rejecting thresholds outside `(0, 1]`
    pub fn new(threshold: f64) -> Result<Self, InvalidThreshold> {
        if threshold > 0.0 && threshold <= 1.0 {
            Ok(Self { threshold })
        } else {
            Err(InvalidThreshold(threshold))
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for RestockPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_RESTOCK_THRESHOLD,
        }
    }
}

/// Decide whether a product needs restocking.
///
/// Pure and total: quantities that cannot be represented as `i64`
/// conservatively flag restock rather than hide a problem, `total <= 0`
/// always flags (no stock target), and otherwise the answer is
/// `available < total * threshold` (strict comparison).
pub fn needs_restock<T, A>(total: T, available: A, threshold: f64) -> bool
where
    T: TryInto<i64>,
    A: TryInto<i64>,
{
    let Ok(total) = TryInto::<i64>::try_into(total) else {
        return true;
    };
    let Ok(available) = TryInto::<i64>::try_into(available) else {
        return true;
    };

    if total <= 0 {
        return true;
    }

    (available as f64) < (total as f64) * threshold
}

/// Pre-save normalization, applied on every normal write path.
///
/// 1. Clamp: `available_quantity` may not exceed `total_quantity`.
/// 2. Recompute: `need_restock` is derived from the post-clamp values.
///
/// The flag-override path deliberately skips this hook.
pub fn normalize(product: &mut Product, policy: RestockPolicy) {
    if product.available_quantity > product.total_quantity {
        product.available_quantity = product.total_quantity;
    }

    product.need_restock = needs_restock(
        product.total_quantity,
        product.available_quantity,
        policy.threshold(),
    );
}

/// The override payload could not be interpreted as a boolean
#[derive(Debug, Error, PartialEq)]
#[error("'{0}' is not a recognized boolean value")]
pub struct FlagParseError(String);

/// Parse the loosely-typed restock-flag payload into a boolean.
///
/// Booleans pass through; numbers map non-zero to `true` and zero to
/// `false`; strings are trimmed and matched case-insensitively against
/// the token tables. Anything else is a parse error.
pub fn parse_restock_flag(value: &Value) -> Result<bool, FlagParseError> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        Value::String(text) => {
            let token = text.trim().to_ascii_lowercase();
            if TRUE_TOKENS.contains(&token.as_str()) {
                Ok(true)
            } else if FALSE_TOKENS.contains(&token.as_str()) {
                Ok(false)
            } else {
                Err(FlagParseError(text.clone()))
            }
        }
        other => Err(FlagParseError(other.to_string())),
    }
}
