//! Word pools the generators draw from.

pub const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Chen", "Dana", "Elif", "Farah", "Gustavo", "Hana", "Ivan", "Jonas",
    "Keiko", "Liam", "Maya", "Nikolai", "Olga", "Priya", "Quinn", "Rafael", "Sofia", "Tariq",
];

pub const LAST_NAMES: &[&str] = &[
    "Anderson", "Bauer", "Costa", "Dubois", "Eriksen", "Fischer", "Garcia", "Horvat", "Ito",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Novak", "Okafor", "Petrov", "Rossi", "Silva",
];

pub const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "test.dev"];

pub const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Pine", "Cedar", "Elm", "Harbor", "Hillside", "Lakeview", "Mill", "River",
];

pub const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Road", "Lane", "Boulevard", "Way"];

pub const CITIES: &[&str] = &[
    "Springfield", "Riverton", "Fairview", "Lakewood", "Georgetown", "Ashland", "Oakdale",
];

pub const STATES: &[&str] = &["CA", "NY", "TX", "WA", "IL", "OR", "CO", "MA", "FL", "GA"];

pub const COUNTRIES: &[&str] = &["United States", "Canada", "Germany", "France", "Japan"];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Ergonomic", "Rustic", "Sleek", "Handcrafted", "Refined", "Compact", "Durable", "Smart",
];

pub const PRODUCT_MATERIALS: &[&str] =
    &["Steel", "Wooden", "Cotton", "Granite", "Bamboo", "Leather"];

pub const PRODUCT_NOUNS: &[&str] =
    &["Chair", "Lamp", "Keyboard", "Backpack", "Mug", "Table", "Watch"];

pub const CATEGORIES: &[&str] =
    &["electronics", "home", "outdoors", "office", "kitchen", "apparel"];

pub const DESCRIPTION_PHRASES: &[&str] = &[
    "Built to last through daily use.",
    "Designed with comfort in mind.",
    "Ships in recyclable packaging.",
    "Backed by a two-year warranty.",
    "A customer favourite this season.",
];

pub const PASSWORD_SYMBOLS: &[&str] = &["!", "@", "#", "$", "%", "&", "*"];
