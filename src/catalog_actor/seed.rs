use rand::Rng;
use rust_decimal::Decimal;

use crate::domain::ProductCreate;

const PRODUCT_TYPES: [&str; 10] = [
    "Laptop", "Smartphone", "Tablet", "Headphones", "Speaker", "Camera", "TV", "Watch", "Printer", "Monitor",
];

const WORDS: [&str; 16] = [
    "Aurora", "Brisk", "Cobalt", "Delta", "Ember", "Fable", "Granite", "Harbor", "Ion", "Juniper", "Kestrel",
    "Lumen", "Meridian", "Nimbus", "Onyx", "Pioneer",
];

const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";

/// Builds `count` random demo products: "<Word> <Type>", priced 0.00 to 99.99.
pub fn demo_products(count: usize) -> Vec<ProductCreate> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let word = WORDS[rng.random_range(0..WORDS.len())];
            let kind = PRODUCT_TYPES[rng.random_range(0..PRODUCT_TYPES.len())];
            let cents: i64 = rng.random_range(0..10_000);
            ProductCreate {
                name: format!("{word} {kind}"),
                price: Decimal::new(cents, 2),
                description: format!("The {} {} you have been waiting for.", word, kind.to_lowercase()),
                image: Some(PLACEHOLDER_IMAGE.to_string()),
            }
        })
        .collect()
}
