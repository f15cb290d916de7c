//! Randomized, schema-shaped records for request bodies and expected shapes.
//!
//! Every call produces an independent record; there is no shared state
//! beyond the thread-local RNG. Overrides are applied either with struct
//! update syntax (`User { email, ..User::generate() }`) or, for JSON-shaped
//! overrides, through [`Fixture::generate_with`].

mod commerce;
mod responses;
mod user;
mod words;

pub use commerce::{Order, OrderItem, OrderStatus, Product};
pub use responses::{ErrorBody, ErrorResponse, Paginated, Pagination, paginated};
pub use user::{Address, User, invalid_emails, weak_passwords};

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Override errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("overrides must be a JSON object")]
    NotAnObject,

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("override does not fit the record: {0}")]
    Json(#[from] serde_json::Error),
}

/// A record type the generator can produce.
pub trait Fixture: Serialize + DeserializeOwned {
    /// A fresh random record.
    fn generate() -> Self;

    /// A fresh random record with the fields named in `overrides` replaced.
    fn generate_with(overrides: Value) -> Result<Self, FixtureError> {
        apply_overrides(Self::generate(), overrides)
    }

    /// The record as a JSON request body.
    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Shallow merge by (serialized) field name: each key of `overrides`
/// replaces the whole field of `record`.
pub fn apply_overrides<T>(record: T, overrides: Value) -> Result<T, FixtureError>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(overrides) = overrides else {
        return Err(FixtureError::NotAnObject);
    };

    let mut value = serde_json::to_value(record)?;
    if let Value::Object(fields) = &mut value {
        for (name, field) in overrides {
            if !fields.contains_key(&name) {
                return Err(FixtureError::UnknownField(name));
            }
            fields.insert(name, field);
        }
    }

    Ok(serde_json::from_value(value)?)
}

pub(crate) fn pick(pool: &[&'static str]) -> &'static str {
    pool.choose(&mut rand::rng()).copied().unwrap_or_default()
}

pub(crate) fn digits(count: usize) -> String {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Short random tag used to keep emails and SKUs unique across calls.
pub(crate) fn unique_tag() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Rounds to whole cents.
pub(crate) fn cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
