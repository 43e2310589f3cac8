//! Shared basket fixtures and generators for benchmarks.
//! Deterministic: same seed → same output across runs.

/// A generated set of bakery transactions.
pub struct BasketFixture {
    /// `(transaction_id, item)` records, possibly with repeats.
    pub records: Vec<(i64, &'static str)>,
    pub transactions: usize,
    pub distinct_items: usize,
}

/// Fixture size presets.
#[derive(Debug, Clone, Copy)]
pub enum FixtureSize {
    /// 100 baskets, unit test scale
    Micro,
    /// 1K baskets, a day of a busy shop
    Small,
    /// 10K baskets, the classic bakery dataset scale
    Medium,
    /// 100K baskets
    Large,
}

impl FixtureSize {
    pub fn transaction_count(&self) -> usize {
        match self {
            Self::Micro => 100,
            Self::Small => 1_000,
            Self::Medium => 10_000,
            Self::Large => 100_000,
        }
    }

    /// Upper bound on item picks per basket.
    pub fn max_basket(&self) -> usize {
        match self {
            Self::Micro => 4,
            Self::Small | Self::Medium | Self::Large => 6,
        }
    }
}

/// Catalogue entry with a popularity weight.
struct ItemSpec {
    label: &'static str,
    weight: usize,
}

const CATALOGUE: &[ItemSpec] = &[
    ItemSpec { label: "Coffee", weight: 30 },
    ItemSpec { label: "Bread", weight: 20 },
    ItemSpec { label: "Tea", weight: 10 },
    ItemSpec { label: "Cake", weight: 7 },
    ItemSpec { label: "Pastry", weight: 6 },
    ItemSpec { label: "Sandwich", weight: 5 },
    ItemSpec { label: "Medialuna", weight: 4 },
    ItemSpec { label: "Hot chocolate", weight: 4 },
    ItemSpec { label: "Cookies", weight: 3 },
    ItemSpec { label: "Brownie", weight: 3 },
    ItemSpec { label: "Farm House", weight: 2 },
    ItemSpec { label: "Muffin", weight: 2 },
    ItemSpec { label: "Alfajores", weight: 2 },
    ItemSpec { label: "Juice", weight: 1 },
    ItemSpec { label: "Soup", weight: 1 },
];

/// Pairs bought together more often than chance: when the first is picked,
/// the second follows with probability `percent`.
const COMPANIONS: &[(&str, &str, u64)] = &[
    ("Cake", "Coffee", 60),
    ("Pastry", "Coffee", 55),
    ("Sandwich", "Tea", 40),
    ("Medialuna", "Coffee", 50),
];

/// Generate a deterministic basket fixture.
pub fn generate_baskets(size: FixtureSize, seed: u64) -> BasketFixture {
    let transactions = size.transaction_count();
    let mut rng = SimpleRng::new(seed);
    let mut records = Vec::with_capacity(transactions * 3);

    for tid in 0..transactions {
        let picks = 1 + (rng.next_u64() as usize) % size.max_basket();
        for _ in 0..picks {
            let item = pick_item(&mut rng);
            records.push((tid as i64, item));
            if let Some(&(_, companion, pct)) = COMPANIONS.iter().find(|(a, _, _)| *a == item) {
                if rng.next_u64() % 100 < pct {
                    records.push((tid as i64, companion));
                }
            }
        }
    }

    let mut labels: Vec<&str> = records.iter().map(|(_, l)| *l).collect();
    labels.sort_unstable();
    labels.dedup();

    BasketFixture {
        records,
        transactions,
        distinct_items: labels.len(),
    }
}

fn pick_item(rng: &mut SimpleRng) -> &'static str {
    let total_weight: usize = CATALOGUE.iter().map(|i| i.weight).sum();
    let mut pick = (rng.next_u64() as usize) % total_weight;
    for spec in CATALOGUE {
        if pick < spec.weight {
            return spec.label;
        }
        pick -= spec.weight;
    }
    CATALOGUE[0].label
}

/// Simple deterministic PRNG (xorshift64) for reproducible fixtures.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_basket_has_a_record() {
        let f = generate_baskets(FixtureSize::Micro, 7);
        let mut ids: Vec<i64> = f.records.iter().map(|(t, _)| *t).collect();
        ids.dedup();
        assert_eq!(ids.len(), f.transactions);
    }

    #[test]
    fn only_catalogue_items() {
        let f = generate_baskets(FixtureSize::Micro, 3);
        assert!(f
            .records
            .iter()
            .all(|(_, l)| CATALOGUE.iter().any(|c| c.label == *l)));
        assert!(f.distinct_items <= CATALOGUE.len());
    }
}
