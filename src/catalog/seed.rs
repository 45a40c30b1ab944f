//! Embedded brand seed — applied once, when the brands table is empty.

/// Seed catalog as a JSON array of brands (camelCase keys, no ids — SQLite
/// assigns them in array order).
pub(super) const SEED_BRANDS: &str = r##"[
  {
    "name": "Lumina Coffee",
    "industry": "Food & Beverage",
    "website": "https://lumina.example",
    "category": "food",
    "primaryColor": "#6f4e37",
    "backgroundColor": "#f7f3ee"
  },
  {
    "name": "Northwind Analytics",
    "industry": "Software",
    "website": "https://northwind.example",
    "category": "technology",
    "primaryColor": "#1f6feb",
    "backgroundColor": "#ffffff"
  },
  {
    "name": "Verdant Outfitters",
    "industry": "Outdoor Apparel",
    "website": "https://verdant.example",
    "category": "retail",
    "primaryColor": "#2f6f4f"
  },
  {
    "name": "Harbor & Oak",
    "industry": "Furniture",
    "category": "retail",
    "primaryColor": "#8b5a2b",
    "backgroundColor": "#faf6f0"
  },
  {
    "name": "Pulsar Fitness",
    "industry": "Health & Wellness",
    "website": "https://pulsar.example",
    "category": "lifestyle",
    "primaryColor": "#e4572e"
  },
  {
    "name": "Quill Legal",
    "industry": "Legal Services",
    "category": "professional"
  }
]"##;
