use crate::usecases::ErrorKind;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed(ErrorKind),
}

impl Outcome {
    pub fn of<T, E>(result: &Result<T, E>) -> Self
    where
        E: HasErrorKind,
    {
        match result {
            Ok(_) => Self::Succeeded,
            Err(err) => Self::Failed(err.kind()),
        }
    }
}

pub trait HasErrorKind {
    fn kind(&self) -> ErrorKind;
}

/// Receives a notification after each operation
/// that passed the service boundary.
pub trait OperationObserver {
    fn operation_finished(&self, operation: &'static str, took: Duration, outcome: Outcome);
}

impl<T: OperationObserver + ?Sized> OperationObserver for &T {
    fn operation_finished(&self, operation: &'static str, took: Duration, outcome: Outcome) {
        (**self).operation_finished(operation, took, outcome);
    }
}
