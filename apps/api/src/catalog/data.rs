//! The curated product table. Eight categories, highest-converting first
//! within each. Ordering matters: lookup walks categories top to bottom and
//! category order breaks gravity ties in the fallback.

use super::{Category, ProductRecord};

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "health",
        synonyms: &["saúde", "salud"],
        products: &[
            ProductRecord { name: "The Smoothie Diet", price: 37.0, commission_pct: 75.0, gravity: 157, url: "clickbank.com" },
            ProductRecord { name: "Metabolic Renewal", price: 37.0, commission_pct: 75.0, gravity: 142, url: "clickbank.com" },
            ProductRecord { name: "Keto After 50", price: 37.0, commission_pct: 75.0, gravity: 189, url: "clickbank.com" },
        ],
    },
    Category {
        name: "fitness",
        synonyms: &[],
        products: &[
            ProductRecord { name: "Old School New Body", price: 39.0, commission_pct: 75.0, gravity: 134, url: "clickbank.com" },
            ProductRecord { name: "Unlock Your Hip Flexors", price: 50.0, commission_pct: 75.0, gravity: 98, url: "clickbank.com" },
            ProductRecord { name: "Yoga Burn", price: 37.0, commission_pct: 75.0, gravity: 167, url: "clickbank.com" },
        ],
    },
    Category {
        name: "wealth",
        synonyms: &["dinheiro", "money", "dinero", "negócio", "business"],
        products: &[
            ProductRecord { name: "12 Minute Affiliate", price: 9.95, commission_pct: 70.0, gravity: 203, url: "clickbank.com" },
            ProductRecord { name: "Perpetual Income 365", price: 9.0, commission_pct: 75.0, gravity: 178, url: "clickbank.com" },
            ProductRecord { name: "Super Affiliate System", price: 997.0, commission_pct: 50.0, gravity: 92, url: "clickbank.com" },
        ],
    },
    Category {
        name: "relationships",
        synonyms: &["relacionamento", "relationship", "amor", "love"],
        products: &[
            ProductRecord { name: "His Secret Obsession", price: 47.0, commission_pct: 75.0, gravity: 201, url: "clickbank.com" },
            ProductRecord { name: "Text Chemistry", price: 47.0, commission_pct: 75.0, gravity: 145, url: "clickbank.com" },
            ProductRecord { name: "The Devotion System", price: 47.0, commission_pct: 75.0, gravity: 112, url: "clickbank.com" },
        ],
    },
    Category {
        name: "spirituality",
        synonyms: &[],
        products: &[
            ProductRecord { name: "Manifestation Magic", price: 47.0, commission_pct: 75.0, gravity: 156, url: "clickbank.com" },
            ProductRecord { name: "Numerologist.com", price: 47.0, commission_pct: 75.0, gravity: 189, url: "clickbank.com" },
            ProductRecord { name: "Moon Reading", price: 47.0, commission_pct: 75.0, gravity: 167, url: "clickbank.com" },
        ],
    },
    Category {
        name: "survival",
        synonyms: &[],
        products: &[
            ProductRecord { name: "The Lost Ways", price: 37.0, commission_pct: 75.0, gravity: 234, url: "clickbank.com" },
            ProductRecord { name: "Backyard Revolution", price: 39.0, commission_pct: 75.0, gravity: 198, url: "clickbank.com" },
            ProductRecord { name: "Alive After Crisis", price: 37.0, commission_pct: 75.0, gravity: 143, url: "clickbank.com" },
        ],
    },
    Category {
        name: "languages",
        synonyms: &[],
        products: &[
            ProductRecord { name: "Rocket Languages", price: 99.0, commission_pct: 50.0, gravity: 87, url: "clickbank.com" },
            ProductRecord { name: "Pimsleur", price: 119.0, commission_pct: 40.0, gravity: 76, url: "clickbank.com" },
        ],
    },
    Category {
        name: "pets",
        synonyms: &[],
        products: &[
            ProductRecord { name: "Brain Training for Dogs", price: 47.0, commission_pct: 75.0, gravity: 201, url: "clickbank.com" },
            ProductRecord { name: "The Ultimate Dog Training", price: 37.0, commission_pct: 75.0, gravity: 154, url: "clickbank.com" },
        ],
    },
];
