//! Item field validation
//!
//! Lengths are counted in characters, not bytes.

use super::ValidationError;

/// Maximum length for item names
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length for item descriptions
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Validated item name (1-255 characters)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name.
    ///
    /// # Example
    /// ```
    /// use items_server::models::ItemName;
    ///
    /// assert!(ItemName::new("Apple").is_ok());
    /// assert!(ItemName::new("").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if s.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated item description (0-1000 characters, empty allowed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDescription(String);

impl ItemDescription {
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        if s.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::TooLong {
                field: "description",
                max: MAX_DESCRIPTION_LEN,
            });
        }

        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Input for creating an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: ItemName,
    pub description: Option<ItemDescription>,
}

impl NewItem {
    pub fn new(name: String, description: Option<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ItemName::new(name)?,
            description: description.map(ItemDescription::new).transpose()?,
        })
    }
}

/// Partial update for an item.
///
/// `None` means "leave the stored value alone". For `description`,
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub name: Option<ItemName>,
    pub description: Option<Option<ItemDescription>>,
}

impl ItemChanges {
    /// Validate raw tri-state fields: outer `None` = absent, `Some(None)` = null.
    pub fn new(
        name: Option<Option<String>>,
        description: Option<Option<String>>,
    ) -> Result<Self, ValidationError> {
        let name = match name {
            None => None,
            Some(None) => return Err(ValidationError::Null { field: "name" }),
            Some(Some(s)) => Some(ItemName::new(s)?),
        };

        let description = match description {
            None => None,
            Some(value) => Some(value.map(ItemDescription::new).transpose()?),
        };

        Ok(Self { name, description })
    }

    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Names of the supplied fields, for logging.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_bounds() {
        assert!(ItemName::new("a").is_ok());
        assert!(ItemName::new("a".repeat(255)).is_ok());

        let err = ItemName::new("a".repeat(256)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 255, .. }));

        let err = ItemName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn name_counts_characters_not_bytes() {
        // 255 two-byte characters is still a valid name
        assert!(ItemName::new("é".repeat(255)).is_ok());
        assert!(ItemName::new("é".repeat(256)).is_err());
    }

    #[test]
    fn description_bounds() {
        assert!(ItemDescription::new("").is_ok());
        assert!(ItemDescription::new("d".repeat(1000)).is_ok());

        let err = ItemDescription::new("d".repeat(1001)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 1000, .. }));
    }

    #[test]
    fn new_item_optional_description() {
        let item = NewItem::new("Apple".into(), None).unwrap();
        assert_eq!(item.name.as_str(), "Apple");
        assert!(item.description.is_none());

        assert!(NewItem::new("".into(), Some("x".into())).is_err());
    }

    #[test]
    fn changes_absent_fields_are_empty() {
        let changes = ItemChanges::new(None, None).unwrap();
        assert!(changes.is_empty());
        assert!(changes.fields().is_empty());
    }

    #[test]
    fn changes_null_description_clears() {
        let changes = ItemChanges::new(None, Some(None)).unwrap();
        assert_eq!(changes.description, Some(None));
        assert_eq!(changes.fields(), vec!["description"]);
    }

    #[test]
    fn changes_rejects_null_name() {
        let err = ItemChanges::new(Some(None), None).unwrap_err();
        assert_eq!(err, ValidationError::Null { field: "name" });
    }

    #[test]
    fn changes_rejects_empty_name() {
        let err = ItemChanges::new(Some(Some(String::new())), None).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }
}
