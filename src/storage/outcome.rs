//! Result of a best-effort read
//!
//! Reads distinguish "there is nothing stored" from "the store could not be
//! read", and let the caller pick whether a failure degrades to an empty
//! list or is surfaced.

use tracing::warn;

use crate::error::{TallyError, TallyResult};

/// Outcome of loading a collection from the store
#[derive(Debug)]
pub enum LoadOutcome<T> {
    /// Records were read
    Loaded(Vec<T>),
    /// The store is absent or holds no records
    Empty,
    /// The store exists but could not be read
    Failed(TallyError),
}

impl<T> LoadOutcome<T> {
    /// Wrap a vector, mapping an empty one to `Empty`
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Loaded(items)
        }
    }

    /// Degrade a failure to an empty list, logging the reason
    pub fn or_empty(self) -> Vec<T> {
        match self {
            Self::Loaded(items) => items,
            Self::Empty => Vec::new(),
            Self::Failed(err) => {
                warn!("Falling back to empty result: {}", err);
                Vec::new()
            }
        }
    }

    /// Surface a failure as an error
    pub fn into_result(self) -> TallyResult<Vec<T>> {
        match self {
            Self::Loaded(items) => Ok(items),
            Self::Empty => Ok(Vec::new()),
            Self::Failed(err) => Err(err),
        }
    }
}

impl<T> From<TallyResult<Option<Vec<T>>>> for LoadOutcome<T> {
    fn from(result: TallyResult<Option<Vec<T>>>) -> Self {
        match result {
            Ok(Some(items)) => Self::from_vec(items),
            Ok(None) => Self::Empty,
            Err(err) => Self::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vec_is_empty() {
        assert!(matches!(LoadOutcome::<u8>::from_vec(vec![]), LoadOutcome::Empty));
        assert!(matches!(LoadOutcome::from_vec(vec![1]), LoadOutcome::Loaded(_)));
    }

    #[test]
    fn test_failure_degrades_or_surfaces() {
        let failed = || LoadOutcome::<u8>::Failed(TallyError::StoreUnavailable("gone".into()));

        assert!(matches!(failed(), LoadOutcome::Failed(_)));
        assert!(failed().or_empty().is_empty());
        assert!(matches!(
            failed().into_result(),
            Err(TallyError::StoreUnavailable(_))
        ));
    }

    #[test]
    fn test_from_read_result() {
        let missing: LoadOutcome<u8> = Ok(None).into();
        assert!(matches!(missing, LoadOutcome::Empty));

        let loaded: LoadOutcome<u8> = Ok(Some(vec![1, 2])).into();
        assert_eq!(loaded.into_result().unwrap(), vec![1, 2]);
    }
}
