use std::sync::PoisonError;
use thiserror::Error;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found error
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),

    /// Stored data could not be mapped back into a domain value
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::Lock(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_poisoned_lock_maps_to_lock_error() {
        let lock = Arc::new(Mutex::new(0));
        let cloned = Arc::clone(&lock);
        let _ = std::thread::spawn(move || {
            let _guard = cloned.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err: RepositoryError = lock.lock().unwrap_err().into();
        assert!(matches!(err, RepositoryError::Lock(_)));
        assert!(err.to_string().starts_with("Lock error"));
    }
}
