//! Pure edit operations over ordered record collections.
//!
//! Shifts and time entries are held by the caller as ordered collections.
//! Every edit here borrows the current collection and returns a new one;
//! the input is never mutated, so a previous render's data stays valid.

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult, ValidationError};

/// A record that can live in an editable collection.
pub trait Record: Clone {
    /// Human-readable name of the record kind, used in errors.
    const ENTITY: &'static str;

    /// The record's unique identifier.
    fn id(&self) -> &str;

    /// Returns a copy of the record under a new id on a new date.
    fn copied(&self, id: String, date: NaiveDate) -> Self;
}

fn position<T: Record>(items: &[T], id: &str) -> EngineResult<usize> {
    items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| EngineError::NotFound {
            entity: T::ENTITY.to_string(),
            id: id.to_string(),
        })
}

/// Appends a record. Fails on `id` if a record with the same id exists.
///
/// # Examples
///
/// ```
/// use roster_engine::collection::insert;
/// use roster_engine::models::{ShiftAssignment, ShiftType};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shift = ShiftAssignment::new(
///     "shift_001",
///     "emp_001",
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     ShiftType::Morning,
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
///     "Ward A",
/// );
///
/// let shifts = insert(&[], shift.clone()).unwrap();
/// assert_eq!(shifts.len(), 1);
/// assert!(insert(&shifts, shift).is_err());
/// ```
pub fn insert<T: Record>(items: &[T], item: T) -> EngineResult<Vec<T>> {
    if items.iter().any(|existing| existing.id() == item.id()) {
        return Err(ValidationError::single("id", format!("'{}' already exists", item.id())).into());
    }
    let mut next = items.to_vec();
    next.push(item);
    Ok(next)
}

/// Replaces the record with the same id, keeping its position.
pub fn replace<T: Record>(items: &[T], item: T) -> EngineResult<Vec<T>> {
    let index = position(items, item.id())?;
    let mut next = items.to_vec();
    next[index] = item;
    Ok(next)
}

/// Removes the record with the given id.
pub fn remove<T: Record>(items: &[T], id: &str) -> EngineResult<Vec<T>> {
    let index = position(items, id)?;
    let mut next = items.to_vec();
    next.remove(index);
    Ok(next)
}

/// Copies the record with the given id onto `date` under a fresh id.
///
/// The copy is placed directly after its source. Returns the new
/// collection and the id of the copy.
pub fn duplicate<T: Record>(
    items: &[T],
    id: &str,
    date: NaiveDate,
) -> EngineResult<(Vec<T>, String)> {
    let index = position(items, id)?;
    let new_id = Uuid::new_v4().to_string();
    debug!(entity = T::ENTITY, source_id = id, new_id = %new_id, %date, "Duplicating record");

    let mut next = items.to_vec();
    next.insert(index + 1, items[index].copied(new_id.clone(), date));
    Ok((next, new_id))
}
