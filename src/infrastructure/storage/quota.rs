use std::collections::BTreeMap;

use crate::domain::errors::StorageError;

/// Default storage area size, matching common browser local storage limits.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Bytes an area occupies: every key plus every value.
pub(crate) fn used_bytes(items: &BTreeMap<String, String>) -> usize {
    items.iter().map(|(k, v)| k.len() + v.len()).sum()
}

/// Checks that replacing `key` with `value` keeps the area within `quota`.
pub(crate) fn check_quota(
    items: &BTreeMap<String, String>,
    key: &str,
    value: &str,
    quota: usize,
) -> Result<(), StorageError> {
    let replaced = items.get(key).map_or(0, |old| key.len() + old.len());
    let required = used_bytes(items) - replaced + key.len() + value.len();

    if required > quota {
        return Err(StorageError::QuotaExceeded { required, quota });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_does_not_double_count() {
        let mut items = BTreeMap::new();
        items.insert("k".to_string(), "12345".to_string());

        assert!(check_quota(&items, "k", "abcde", 6).is_ok());
        assert!(check_quota(&items, "k", "abcdef", 6).is_err());
    }

    #[test]
    fn test_new_key_counts_toward_quota() {
        let mut items = BTreeMap::new();
        items.insert("a".to_string(), "1".to_string());

        let err = check_quota(&items, "b", "2", 3).unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                required: 4,
                quota: 3
            }
        ));
    }
}
