//! Read-only pattern metadata catalog.
//!
//! Built once on first access and never mutated; consumable without any
//! chart in hand.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::sinsal::{ALL_SINSAL, Polarity, Sinsal};

/// Static metadata describing one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SinsalInfo {
    /// Stable camelCase key.
    pub key: &'static str,
    /// Korean name.
    pub korean: &'static str,
    /// Hanja label.
    pub hanja: &'static str,
    /// Traditional polarity.
    pub polarity: Polarity,
    /// One-line meaning.
    pub meaning: &'static str,
}

static CATALOG: Lazy<BTreeMap<Sinsal, SinsalInfo>> = Lazy::new(|| {
    ALL_SINSAL
        .iter()
        .map(|&sinsal| {
            (
                sinsal,
                SinsalInfo {
                    key: sinsal.key(),
                    korean: sinsal.korean(),
                    hanja: sinsal.hanja(),
                    polarity: sinsal.polarity(),
                    meaning: sinsal.meaning(),
                },
            )
        })
        .collect()
});

/// The full metadata catalog, keyed by pattern.
pub fn catalog() -> &'static BTreeMap<Sinsal, SinsalInfo> {
    &CATALOG
}

/// Metadata for one pattern.
pub fn info(sinsal: Sinsal) -> &'static SinsalInfo {
    &CATALOG[&sinsal]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_pattern() {
        assert_eq!(catalog().len(), ALL_SINSAL.len());
        for sinsal in ALL_SINSAL {
            let entry = info(sinsal);
            assert_eq!(entry.key, sinsal.key());
            assert!(!entry.meaning.is_empty());
            assert!(!entry.korean.is_empty());
        }
    }

    #[test]
    fn catalog_is_stable_across_accesses() {
        assert!(std::ptr::eq(catalog(), catalog()));
    }
}
