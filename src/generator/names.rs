//! Customer name synthesis from fixed name pools.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Ben", "Carla", "Diego", "Elena", "Felix", "Grace", "Hassan",
    "Ingrid", "Jamal", "Katya", "Liam", "Mona", "Noah", "Olivia", "Pavel",
    "Quinn", "Rosa", "Sam", "Tara", "Umar", "Vera", "Wes", "Yuki", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brooks", "Chen", "Dubois", "Evans", "Fischer", "Garcia",
    "Hughes", "Ivanov", "Johnson", "Kim", "Larsen", "Morales", "Nguyen",
    "Okafor", "Petrov", "Quintero", "Rossi", "Silva", "Tanaka", "Ueda",
    "Vargas", "Walker", "Yamamoto", "Zhang",
];

/// Returns a plausible "First Last" customer name.
pub fn full_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{} {}", first, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn names_come_from_the_pools() {
        let mut rng = thread_rng();
        for _ in 0..50 {
            let name = full_name(&mut rng);
            let (first, last) = name.split_once(' ').unwrap();
            assert!(FIRST_NAMES.contains(&first));
            assert!(LAST_NAMES.contains(&last));
        }
    }
}
