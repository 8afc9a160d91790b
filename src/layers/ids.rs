use crate::layers::base::LayerId;

/// Hands out layer ids and derives z-indexes from them.
///
/// Ids start at 0, strictly increase and are never reused, even after the
/// layer they were given to is removed.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> LayerId {
        let id = LayerId(self.next);
        self.next += 1;
        id
    }

    pub fn z_index_for(base: i64, id: LayerId) -> i64 {
        base.saturating_add(i64::try_from(id.0).unwrap_or(i64::MAX))
    }
}
