//! Operation id minting

/// Source of idempotency tokens for mutating calls.
///
/// Ids are the decimal strings "0", "1", "2", ... in issue order. A value is
/// handed out once and never again by the same counter.
#[derive(Debug, Default)]
pub struct OperationIds {
    next: u64,
}

impl OperationIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next unused id
    pub fn mint(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_and_increments() {
        let mut ids = OperationIds::new();
        assert_eq!(ids.issued(), 0);
        assert_eq!(ids.mint(), "0");
        assert_eq!(ids.mint(), "1");
        assert_eq!(ids.mint(), "2");
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn test_never_repeats() {
        let mut ids = OperationIds::new();
        let minted: Vec<String> = (0..100).map(|_| ids.mint()).collect();
        let mut unique = minted.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), minted.len());
    }
}
