//! Product and order records.

use chrono::{DateTime, Days, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::user::Address;
use super::{Fixture, cents, new_id, pick, unique_tag, words};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub sku: String,
    pub in_stock: bool,
    pub stock_quantity: u32,
}

impl Fixture for Product {
    fn generate() -> Self {
        let mut rng = rand::rng();
        let stock_quantity = if rng.random_bool(0.85) {
            rng.random_range(1..500)
        } else {
            0
        };

        Self {
            id: new_id(),
            name: format!(
                "{} {} {}",
                pick(words::PRODUCT_ADJECTIVES),
                pick(words::PRODUCT_MATERIALS),
                pick(words::PRODUCT_NOUNS)
            ),
            description: format!(
                "{} {}",
                pick(words::DESCRIPTION_PHRASES),
                pick(words::DESCRIPTION_PHRASES)
            ),
            price: cents(rng.random_range(1.0..1000.0)),
            category: pick(words::CATEGORIES).to_string(),
            sku: format!("SKU-{}", unique_tag().to_uppercase()),
            in_stock: stock_quantity > 0,
            stock_quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl Fixture for OrderItem {
    fn generate() -> Self {
        let mut rng = rand::rng();
        Self {
            product_id: new_id(),
            quantity: rng.random_range(1..6),
            unit_price: cents(rng.random_range(1.0..250.0)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    /// Sum of `quantity * unit_price` over the generated items. Overriding
    /// `items` leaves it as generated.
    pub total: f64,
    pub status: OrderStatus,
    pub shipping_address: Address,
    pub created_at: DateTime<Utc>,
}

impl Fixture for Order {
    fn generate() -> Self {
        let mut rng = rand::rng();
        let items: Vec<OrderItem> = (0..rng.random_range(1..5))
            .map(|_| OrderItem::generate())
            .collect();
        let total = cents(
            items
                .iter()
                .map(|item| item.unit_price * f64::from(item.quantity))
                .sum(),
        );
        let status = OrderStatus::ALL
            .choose(&mut rng)
            .copied()
            .unwrap_or(OrderStatus::Pending);
        let created_at = Utc::now()
            .checked_sub_days(Days::new(rng.random_range(0..90)))
            .unwrap_or_else(Utc::now);

        Self {
            id: new_id(),
            user_id: new_id(),
            items,
            total,
            status,
            shipping_address: Address::generate(),
            created_at,
        }
    }
}
