//! User and address records.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{Fixture, digits, new_id, pick, unique_tag, words};
use crate::config::Credentials;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Fixture for Address {
    fn generate() -> Self {
        let number = rand::rng().random_range(1..9999);
        Self {
            street: format!(
                "{} {} {}",
                number,
                pick(words::STREET_NAMES),
                pick(words::STREET_SUFFIXES)
            ),
            city: pick(words::CITIES).to_string(),
            state: pick(words::STATES).to_string(),
            zip_code: digits(5),
            country: pick(words::COUNTRIES).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub role: String,
    pub address: Address,
    pub created_at: DateTime<Utc>,
}

impl Fixture for User {
    fn generate() -> Self {
        let mut rng = rand::rng();
        let first_name = pick(words::FIRST_NAMES);
        let last_name = pick(words::LAST_NAMES);

        let today = Utc::now().date_naive();
        let age_days = rng.random_range(18 * 365..80 * 365);
        let date_of_birth = today.checked_sub_days(Days::new(age_days)).unwrap_or(today);

        let created_at = Utc::now()
            .checked_sub_days(Days::new(rng.random_range(0..365)))
            .unwrap_or_else(Utc::now);

        Self {
            id: new_id(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: format!(
                "{}.{}.{}@{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                unique_tag(),
                pick(words::EMAIL_DOMAINS)
            ),
            password: strong_password(),
            phone: format!("+1-{}-{}-{}", digits(3), digits(3), digits(4)),
            date_of_birth,
            role: "user".to_string(),
            address: Address::generate(),
            created_at,
        }
    }
}

impl User {
    /// Body for `POST /register`.
    pub fn registration(&self) -> Value {
        json!({
            "email": self.email,
            "password": self.password,
            "firstName": self.first_name,
            "lastName": self.last_name,
        })
    }

    /// Body for `POST /login`.
    pub fn login(&self) -> Value {
        json!({ "email": self.email, "password": self.password })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Ten characters with upper, lower, digit and symbol classes.
fn strong_password() -> String {
    let mut rng = rand::rng();
    let upper = char::from(b'A' + rng.random_range(0..26u8));
    let lower: String = (0..6)
        .map(|_| char::from(b'a' + rng.random_range(0..26u8)))
        .collect();
    format!("{}{}{}{}", upper, lower, digits(2), pick(words::PASSWORD_SYMBOLS))
}

/// Addresses an email validator must reject.
pub fn invalid_emails() -> Vec<&'static str> {
    vec![
        "",
        "plainaddress",
        "@missing-local.com",
        "missing-at.example.com",
        "user@",
        "user@.com",
        "user name@example.com",
    ]
}

/// Passwords a strength check must reject.
pub fn weak_passwords() -> Vec<&'static str> {
    vec!["", "short1A", "alllowercase1", "ALLUPPERCASE1", "NoDigitsHere!", "12345678"]
}
