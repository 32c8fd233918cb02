//! Listing parameters: limit/offset pagination plus name filter

use serde::Deserialize;

use super::ValidationError;

/// Maximum items per page
pub const MAX_LIMIT: i64 = 100;

/// Default items per page
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw query parameters for `GET /items`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    /// Unsigned, so a negative offset fails to parse
    pub offset: Option<u64>,
    pub name: Option<String>,
}

/// Validated listing query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Items per page (1..=100)
    pub limit: usize,
    /// Items to skip, counted over the filtered sequence
    pub offset: usize,
    /// Case-insensitive substring filter; blank filters are dropped
    pub name: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT as usize,
            offset: 0,
            name: None,
        }
    }
}

impl TryFrom<ListParams> for ListQuery {
    type Error = ValidationError;

    /// Out-of-range values are rejected, never clamped.
    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
        if limit < 1 {
            return Err(ValidationError::BelowMinimum { field: "limit", min: 1 });
        }
        if limit > MAX_LIMIT {
            return Err(ValidationError::AboveMaximum {
                field: "limit",
                max: MAX_LIMIT,
            });
        }

        // Offsets past the end just give an empty page
        let offset = params.offset.unwrap_or(0);

        Ok(Self {
            limit: limit as usize,
            offset: usize::try_from(offset).unwrap_or(usize::MAX),
            name: params.name.filter(|n| !n.trim().is_empty()),
        })
    }
}

impl ListQuery {
    /// Filter then slice an already ordered sequence.
    ///
    /// The filter compares lower-cased text; the offset counts from the start
    /// of the filtered sequence.
    pub fn apply<T, F>(&self, items: Vec<T>, name_of: F) -> Vec<T>
    where
        F: Fn(&T) -> &str,
    {
        let needle = self.name.as_ref().map(|n| n.to_lowercase());

        items
            .into_iter()
            .filter(|item| match &needle {
                Some(needle) => name_of(item).to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<i64>, offset: Option<u64>, name: Option<&str>) -> Result<ListQuery, ValidationError> {
        ListQuery::try_from(ListParams {
            limit,
            offset,
            name: name.map(str::to_owned),
        })
    }

    fn names(list: &[&'static str]) -> Vec<&'static str> {
        list.to_vec()
    }

    #[test]
    fn defaults() {
        let q = query(None, None, None).unwrap();
        assert_eq!(q, ListQuery::default());
        assert_eq!(q.limit, 10);
        assert_eq!(q.offset, 0);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            query(Some(0), None, None).unwrap_err(),
            ValidationError::BelowMinimum { field: "limit", .. }
        ));
        assert!(matches!(
            query(Some(101), None, None).unwrap_err(),
            ValidationError::AboveMaximum { field: "limit", .. }
        ));
        assert!(query(Some(100), Some(0), None).is_ok());
        assert!(query(Some(1), None, None).is_ok());
    }

    #[test]
    fn blank_filter_is_dropped() {
        assert_eq!(query(None, None, Some("   ")).unwrap().name, None);
        assert_eq!(query(None, None, Some("")).unwrap().name, None);
    }

    #[test]
    fn case_insensitive_filter_keeps_order() {
        let q = query(None, None, Some("APP")).unwrap();
        let page = q.apply(names(&["Apple", "apple pie", "Banana"]), |s| *s);
        assert_eq!(page, vec!["Apple", "apple pie"]);
    }

    #[test]
    fn filter_keeps_surrounding_whitespace() {
        // Only blankness is checked; the text itself is matched as given.
        let q = query(None, None, Some(" pie")).unwrap();
        let page = q.apply(names(&["Apple", "apple pie", "pie"]), |s| *s);
        assert_eq!(page, vec!["apple pie"]);
    }

    #[test]
    fn pagination_composes_with_filter() {
        let items: Vec<String> = (1..=15)
            .map(|i| format!("item-{}", i))
            .chain(["other".to_string()])
            .collect();
        let q = query(Some(5), Some(10), Some("item")).unwrap();
        let page = q.apply(items, |s| s.as_str());
        let expected: Vec<String> = (11..=15).map(|i| format!("item-{}", i)).collect();
        assert_eq!(page, expected);
    }

    #[test]
    fn offset_past_end_is_empty() {
        let q = query(Some(10), Some(50), None).unwrap();
        let page = q.apply(names(&["a", "b"]), |s| *s);
        assert!(page.is_empty());
    }

    #[test]
    fn huge_offset_is_accepted() {
        let q = query(None, Some(u64::MAX), None).unwrap();
        assert!(q.apply(names(&["a", "b"]), |s| *s).is_empty());

        let params: ListParams = serde_json::from_str(r#"{"offset": 18446744073709551615}"#).unwrap();
        assert_eq!(params.offset, Some(u64::MAX));
        assert!(serde_json::from_str::<ListParams>(r#"{"offset": -1}"#).is_err());
    }

    #[test]
    fn short_last_page() {
        let q = query(Some(2), Some(1), None).unwrap();
        let page = q.apply(names(&["a", "b"]), |s| *s);
        assert_eq!(page, vec!["b"]);
    }
}
