/// Locale-aware string ordering.
///
/// Wraps the Unicode Collation Algorithm (CLDR root tailoring) so names
/// sort the way a person expects (`apple` < `Banana` < `cherry`) rather
/// than by byte value. Strings that collate equal are tie-broken by their
/// code points, which keeps every ordering total and deterministic.
use feruca::Collator;
use std::cmp::Ordering;

/// A reusable collator. Creating one loads the collation tables, so build
/// it once per sort rather than once per comparison.
pub struct LocaleCollator {
    inner: Collator,
}

impl LocaleCollator {
    pub fn new() -> Self {
        Self {
            inner: Collator::default(),
        }
    }

    /// Compare two strings under locale collation.
    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.inner.collate(a, b)
    }
}

impl Default for LocaleCollator {
    fn default() -> Self {
        Self::new()
    }
}
