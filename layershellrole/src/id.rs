use std::sync::atomic::{self, AtomicU64};

static COUNT: AtomicU64 = AtomicU64::new(1);

/// The identifier of a shell surface.
///
/// It is handed to the compositor event path and to the toolkit's
/// size-allocation subscription, so both can find the surface again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(u64);

impl Id {
    /// Creates a new unique surface id.
    pub fn unique() -> Id {
        Id(COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}
