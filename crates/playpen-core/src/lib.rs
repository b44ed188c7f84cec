pub mod answer;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod game_registry;
pub mod round;
pub mod session;
pub mod tasks;
pub mod tooltip;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::catalog::{Catalog, CatalogItem, ItemColor};
    use crate::session::SessionStore;

    /// Nine items: eight distinct initials, seven distinct colors, one
    /// colorless item (`cloud`).
    pub fn sample_catalog() -> Catalog {
        let items = [
            ("apple", "🍎", Some(ItemColor::Red)),
            ("banana", "🍌", Some(ItemColor::Yellow)),
            ("cloud", "☁️", None),
            ("frog", "🐸", Some(ItemColor::Green)),
            ("whale", "🐳", Some(ItemColor::Blue)),
            ("orange", "🍊", Some(ItemColor::Orange)),
            ("grapes", "🍇", Some(ItemColor::Purple)),
            ("cherry", "🍒", Some(ItemColor::Red)),
            ("dog", "🐶", Some(ItemColor::Brown)),
        ]
        .into_iter()
        .map(|(name, pictogram, color)| CatalogItem {
            name: name.to_string(),
            pictogram: pictogram.to_string(),
            color,
        })
        .collect();
        Catalog::new(items).expect("sample catalog is valid")
    }

    /// Deterministic RNG for reproducible rounds.
    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// In-memory [`SessionStore`] that counts writes.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub entries: HashMap<String, String>,
        pub writes: usize,
    }

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.writes += 1;
            self.entries.insert(key.to_string(), value.to_string());
        }

        fn remove(&mut self, key: &str) {
            self.entries.remove(key);
        }
    }
}
