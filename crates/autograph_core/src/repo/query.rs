//! Filter criteria and pagination envelopes.
//!
//! # Invariants
//! - `Criterion::Any` and `Criterion::Equals(FieldValue::Null)` never exclude a record.
//! - Pages are 1-indexed; `total_pages = ceil(total / limit)`.

use crate::model::record::{FieldValue, Record};
use serde::Serialize;

/// Constraint on one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// No constraint.
    Any,
    /// Field equals the value. `Null` means no constraint.
    Equals(FieldValue),
    /// Field equals one of the values.
    OneOf(Vec<FieldValue>),
}

impl Criterion {
    pub fn matches(&self, value: &FieldValue) -> bool {
        match self {
            Self::Any => true,
            Self::Equals(expected) if expected.is_null() => true,
            Self::Equals(expected) => expected.same_as(value),
            Self::OneOf(options) => options.iter().any(|option| option.same_as(value)),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        match self {
            Self::Any => true,
            Self::Equals(expected) => expected.is_null(),
            Self::OneOf(_) => false,
        }
    }
}

/// Conjunction of per-field criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter<F> {
    criteria: Vec<(F, Criterion)>,
}

impl<F> Default for Filter<F> {
    fn default() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }
}

impl<F: Copy> Filter<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: F, criterion: Criterion) -> Self {
        self.criteria.push((field, criterion));
        self
    }

    pub fn eq(self, field: F, value: impl Into<FieldValue>) -> Self {
        self.with(field, Criterion::Equals(value.into()))
    }

    pub fn one_of<I, V>(self, field: F, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        self.with(
            field,
            Criterion::OneOf(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Names a field without constraining it.
    pub fn any(self, field: F) -> Self {
        self.with(field, Criterion::Any)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.criteria
            .iter()
            .all(|(_, criterion)| criterion.is_unconstrained())
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Record<Field = F>,
    {
        self.criteria
            .iter()
            .all(|(field, criterion)| criterion.matches(&record.field(*field)))
    }
}

/// Case-insensitive substring match over any of `fields`.
///
/// An empty needle matches every record.
pub(crate) fn matches_text<R: Record>(record: &R, needle_lower: &str, fields: &[R::Field]) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    fields.iter().any(|field| {
        record
            .field(*field)
            .render()
            .to_lowercase()
            .contains(needle_lower)
    })
}

/// Page position metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Normalizes `page`/`limit` to at least 1 and derives page counts.
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit);
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Half-open index range of this page, clamped to `total`.
    pub fn bounds(&self) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.limit).min(self.total);
        let end = start.saturating_add(self.limit).min(self.total);
        (start, end)
    }
}

/// One page of records plus its position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<R> {
    pub data: Vec<R>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::{Criterion, Pagination};
    use crate::model::record::FieldValue;

    #[test]
    fn null_equality_is_unconstrained() {
        let criterion = Criterion::Equals(FieldValue::Null);
        assert!(criterion.is_unconstrained());
        assert!(criterion.matches(&FieldValue::Text("anything".to_string())));
    }

    #[test]
    fn one_of_is_membership() {
        let criterion = Criterion::OneOf(vec!["a".into(), "b".into()]);
        assert!(criterion.matches(&"b".into()));
        assert!(!criterion.matches(&"c".into()));
        assert!(!Criterion::OneOf(Vec::new()).matches(&"a".into()));
    }

    #[test]
    fn pagination_metadata() {
        let meta = Pagination::new(2, 3, 7);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(meta.has_prev);
        assert_eq!(meta.bounds(), (3, 6));

        let last = Pagination::new(3, 3, 7);
        assert!(!last.has_next);
        assert_eq!(last.bounds(), (6, 7));
    }

    #[test]
    fn page_beyond_end_is_empty_range() {
        let meta = Pagination::new(9, 5, 7);
        assert_eq!(meta.bounds(), (7, 7));
        assert!(!meta.has_next);
    }

    #[test]
    fn zero_page_and_limit_are_normalized() {
        let meta = Pagination::new(0, 0, 4);
        assert_eq!(meta.page, 1);
        assert_eq!(meta.limit, 1);
        assert_eq!(meta.total_pages, 4);
    }
}
