use rand::{Rng, SeedableRng, rngs::StdRng};
use sea_orm::prelude::Decimal;

use crate::models::MovieRecord;

/// Decides the list price stored with each imported movie.
pub trait PricePolicy {
    fn price(&mut self, record: &MovieRecord) -> Option<Decimal>;
}

const MIN_CENTS: i64 = 500;
const MAX_CENTS: i64 = 1500;

/// Uniform price in `[5.00, 15.00]`, in whole cents.
pub struct RandomPrice<R = StdRng> {
    rng: R,
}

impl RandomPrice {
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Repeatable prices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPrice<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PricePolicy for RandomPrice<R> {
    fn price(&mut self, _record: &MovieRecord) -> Option<Decimal> {
        let cents = self.rng.random_range(MIN_CENTS..=MAX_CENTS);
        Some(Decimal::new(cents, 2))
    }
}

/// Same price for every movie; `None` leaves the column empty.
#[cfg(test)]
pub struct FixedPrice(pub Option<Decimal>);

#[cfg(test)]
impl PricePolicy for FixedPrice {
    fn price(&mut self, _record: &MovieRecord) -> Option<Decimal> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MovieRecord {
        MovieRecord {
            name: "Heat".to_string(),
            year: 1995,
            runtime: 170,
            rating: 8.3,
            votes: 690_000,
            meta_score: Some(76.0),
            gross: Some(67.44),
            certification: "R".to_string(),
            description: "Thieves and a detective.".to_string(),
            genres: vec![],
            directors: vec![],
            stars: vec![],
        }
    }

    #[test]
    fn random_price_stays_in_range_with_two_decimals() {
        let mut policy = RandomPrice::seeded(7);
        let min = Decimal::new(MIN_CENTS, 2);
        let max = Decimal::new(MAX_CENTS, 2);

        for _ in 0..1_000 {
            let price = policy.price(&record()).unwrap();
            assert!(price >= min && price <= max, "{price} out of range");
            assert_eq!(price.scale(), 2);
        }
    }

    #[test]
    fn seeded_policies_repeat() {
        let mut a = RandomPrice::seeded(42);
        let mut b = RandomPrice::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.price(&record()), b.price(&record()));
        }
    }

    #[test]
    fn fixed_price_is_constant() {
        let mut policy = FixedPrice(Some(Decimal::new(999, 2)));
        assert_eq!(policy.price(&record()), Some(Decimal::new(999, 2)));
        assert_eq!(FixedPrice(None).price(&record()), None);
    }
}
