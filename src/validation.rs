//! Input integrity checks for process sets.
//!
//! The engine itself never rejects input: by the time a simulation runs,
//! descriptors are assumed complete and well-formed. These checks let the
//! caller enforce that assumption at the mutation boundary. Detects:
//! - Incomplete drafts (missing name, arrival, or burst)
//! - Duplicate ids and duplicate display names
//! - Zero bursts and empty names

use std::collections::HashSet;

use crate::models::{Process, ProcessSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A draft is missing its name, arrival time, or burst time.
    IncompleteDescriptor,
    /// Two processes share the same id.
    DuplicateId,
    /// Two processes share the same display name.
    DuplicateName,
    /// A burst time of zero: the process would never occupy the CPU.
    ZeroBurst,
    /// An empty display name.
    EmptyName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a caller-owned process set before simulation.
///
/// Flags incomplete drafts (which [`crate::models::ProcessSet::snapshot`]
/// would silently skip) and then applies [`validate_processes`] to the
/// complete ones.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_process_set(set: &ProcessSet) -> ValidationResult {
    let mut errors = Vec::new();

    for (id, draft) in set.iter() {
        if !draft.is_complete() {
            errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteDescriptor,
                format!("Process {id} is missing a name, arrival time, or burst time"),
            ));
        }
    }

    if let Err(process_errors) = validate_processes(&set.snapshot()) {
        errors.extend(process_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an ordered slice of complete descriptors.
///
/// Checks:
/// 1. No duplicate process ids
/// 2. No duplicate display names (names key timeline lookups downstream)
/// 3. No empty display names
/// 4. All burst times positive
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut names = HashSet::new();

    for process in processes {
        if !ids.insert(process.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", process.id),
            ));
        }

        if process.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Process {} has an empty name", process.id),
            ));
        } else if !names.insert(process.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: '{}'", process.name),
            ));
        }

        if process.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has a zero burst time", process.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
