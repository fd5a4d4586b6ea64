//! Assembly of complete synthetic orders.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use rand::{thread_rng, Rng};

use crate::generator::{menu, names};
use crate::model::{Order, OrderId};

/// How order identifiers are produced.
#[derive(Debug, Clone)]
pub enum IdMode {
    /// Every order carries the same placeholder id.
    Fixed(u64),
    /// Monotonically increasing numeric id, unique per process lifetime.
    Counter,
    /// Process-unique `order_{n}` string token.
    Token,
}

/// Produces fully populated [`Order`] records.
///
/// Each call builds a fresh record: new name, new timestamp, new item
/// list. Nothing is shared between successive orders.
pub struct OrderGenerator {
    id_mode: IdMode,
    counter: AtomicU64,
    user_id: Option<u32>,
}

impl OrderGenerator {
    /// `user_id: None` draws a fresh user id in 1..=10 for every order;
    /// `Some(n)` pins it for the whole process.
    pub fn new(id_mode: IdMode, user_id: Option<u32>) -> Self {
        Self {
            id_mode,
            counter: AtomicU64::new(1),
            user_id,
        }
    }

    fn next_id(&self) -> OrderId {
        match &self.id_mode {
            IdMode::Fixed(n) => OrderId::Number(*n),
            IdMode::Counter => OrderId::Number(self.counter.fetch_add(1, Ordering::SeqCst)),
            IdMode::Token => {
                let n = self.counter.fetch_add(1, Ordering::SeqCst);
                OrderId::Token(format!("order_{}", n))
            }
        }
    }

    /// Builds one order, timestamped at the moment of generation.
    pub fn generate(&self) -> Order {
        let mut rng = thread_rng();
        Order {
            id: self.next_id(),
            customer_name: names::full_name(&mut rng),
            timestamp: Utc::now(),
            user_id: self.user_id.unwrap_or_else(|| rng.gen_range(1..=10)),
            items: menu::random_items(&mut rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_mode_yields_distinct_increasing_ids() {
        let generator = OrderGenerator::new(IdMode::Counter, Some(1));
        let first = generator.generate();
        let second = generator.generate();

        assert_ne!(first.id, second.id);
        assert_eq!(first.id, OrderId::Number(1));
        assert_eq!(second.id, OrderId::Number(2));
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn token_mode_yields_distinct_tokens() {
        let generator = OrderGenerator::new(IdMode::Token, Some(1));
        let first = generator.generate();
        let second = generator.generate();

        assert_eq!(first.id, OrderId::Token("order_1".to_string()));
        assert_eq!(second.id, OrderId::Token("order_2".to_string()));
    }

    #[test]
    fn fixed_mode_repeats_the_placeholder() {
        let generator = OrderGenerator::new(IdMode::Fixed(3), Some(1));
        assert_eq!(generator.generate().id, OrderId::Number(3));
        assert_eq!(generator.generate().id, OrderId::Number(3));
    }

    #[test]
    fn pinned_user_id_is_used_verbatim() {
        let generator = OrderGenerator::new(IdMode::Counter, Some(7));
        for _ in 0..10 {
            assert_eq!(generator.generate().user_id, 7);
        }
    }

    #[test]
    fn random_user_id_stays_in_range() {
        let generator = OrderGenerator::new(IdMode::Counter, None);
        for _ in 0..100 {
            let order = generator.generate();
            assert!((1..=10).contains(&order.user_id));
        }
    }

    #[test]
    fn orders_always_carry_one_to_three_items() {
        let generator = OrderGenerator::new(IdMode::Counter, None);
        for _ in 0..100 {
            let order = generator.generate();
            assert!((1..=3).contains(&order.items.len()));
        }
    }
}
