//! Ownership guard for mutating resource operations.
//!
//! Every delete/update handler loads the target row's owner column and runs
//! it through [`check_ownership`] before touching the row. The guard lives
//! here so the comparison is written exactly once.

use uuid::Uuid;

use crate::errors::AppError;

/// Outcome of comparing a row's stored owner against the caller's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// No row with that id exists.
    Missing,
    /// The caller owns the row.
    Owned,
    /// The row exists but belongs to someone else.
    Mismatch,
}

pub fn check_ownership(stored_owner: Option<Uuid>, caller: Uuid) -> Ownership {
    match stored_owner {
        None => Ownership::Missing,
        Some(owner) if owner == caller => Ownership::Owned,
        Some(_) => Ownership::Mismatch,
    }
}

/// Guard for operations where a missing row is an error (e.g. status update).
/// Returns `Forbidden` on mismatch and `NotFound` with `missing_msg` when the
/// row does not exist.
pub fn require_owner(
    stored_owner: Option<Uuid>,
    caller: Uuid,
    missing_msg: impl Into<String>,
) -> Result<(), AppError> {
    match check_ownership(stored_owner, caller) {
        Ownership::Owned => Ok(()),
        Ownership::Mismatch => Err(AppError::Forbidden),
        Ownership::Missing => Err(AppError::NotFound(missing_msg.into())),
    }
}

/// Guard for deletes, which are idempotent: a missing row is a successful
/// no-op, not an error. `Ok(true)` means the row exists, belongs to the
/// caller, and may be deleted; `Ok(false)` means there is nothing to do.
pub fn allow_idempotent_delete(
    stored_owner: Option<Uuid>,
    caller: Uuid,
) -> Result<bool, AppError> {
    match check_ownership(stored_owner, caller) {
        Ownership::Missing => Ok(false),
        Ownership::Owned => Ok(true),
        Ownership::Mismatch => Err(AppError::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_row() {
        assert_eq!(
            check_ownership(None, Uuid::new_v4()),
            Ownership::Missing
        );
    }

    #[test]
    fn test_owner_matches() {
        let id = Uuid::new_v4();
        assert_eq!(check_ownership(Some(id), id), Ownership::Owned);
    }

    #[test]
    fn test_owner_mismatch() {
        assert_eq!(
            check_ownership(Some(Uuid::new_v4()), Uuid::new_v4()),
            Ownership::Mismatch
        );
    }

    #[test]
    fn test_delete_of_missing_row_is_a_successful_noop() {
        // Deleting an id that no longer exists reports success, so a
        // repeated delete of the same id is idempotent.
        assert!(!allow_idempotent_delete(None, Uuid::new_v4()).unwrap());
    }

    #[test]
    fn test_delete_of_owned_row_proceeds() {
        let id = Uuid::new_v4();
        assert!(allow_idempotent_delete(Some(id), id).unwrap());
    }

    #[test]
    fn test_delete_of_foreign_row_is_forbidden() {
        let err = allow_idempotent_delete(Some(Uuid::new_v4()), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[test]
    fn test_require_owner_missing_is_not_found() {
        let err = require_owner(None, Uuid::new_v4(), "Application x not found").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_require_owner_mismatch_is_forbidden() {
        let err =
            require_owner(Some(Uuid::new_v4()), Uuid::new_v4(), "missing").unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }
}
