use crate::shared::core::primitives::IdGenerator;
use uuid::Uuid;

// Keeps minted ids clear of the small ids used by record fixtures.
const BASE: u128 = 1 << 64;

/// Deterministic ids: the n-th minted id is `BASE + n`.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    issued: u128,
}

impl SequentialIds {
    pub fn issued(&self) -> usize {
        self.issued as usize
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        self.issued += 1;
        Uuid::from_u128(BASE + self.issued)
    }
}

#[cfg(test)]
mod sequential_ids_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_count_and_never_repeat() {
        let mut ids = SequentialIds::default();
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
        assert_eq!(ids.issued(), 2);
        assert_eq!(second, Uuid::from_u128(BASE + 2));
    }
}
