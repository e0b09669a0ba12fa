// Surrogate identifiers shared by every table, and the generator that mints them.
//
// Ids are opaque. Nothing may derive meaning from their bytes, and once minted they are
// never reassigned.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! surrogate_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }
    };
}

surrogate_id!(ProductId);
surrogate_id!(BranchId);
surrogate_id!(OrderId);

/// Source of fresh surrogate ids for a run.
pub trait IdGenerator {
    fn next_id(&mut self) -> Uuid;
}

/// Time-ordered v7 ids, used outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&mut self) -> Uuid {
        Uuid::now_v7()
    }
}
