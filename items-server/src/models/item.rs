//! Item model - the single persisted resource
//!
//! `Item` is what the database returns and what the API serializes.
//! `NewItem` and `ItemPatch` are the validated inputs for create and update.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::ValidationError;

/// Item record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    /// Database-assigned identifier, increasing by insertion order
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Widget")]
    pub name: String,
    /// `null` when never set
    #[schema(example = "A widget")]
    pub description: Option<String>,
}

/// Validated, non-empty item name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name, rejecting the empty string.
    ///
    /// # Example
    /// ```
    /// use items_server::models::ItemName;
    ///
    /// assert!(ItemName::new("Widget").is_ok());
    /// assert!(ItemName::new("").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "Name" });
        }
        Ok(Self(s))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Input for the create operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: ItemName,
    pub description: Option<String>,
}

impl NewItem {
    /// Build from raw request fields.
    ///
    /// A missing name and an empty name are both reported as required.
    pub fn new(name: Option<String>, description: Option<String>) -> Result<Self, ValidationError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::Required { field: "Name" })?;

        Ok(Self {
            name: ItemName::new(name)?,
            description,
        })
    }
}

/// Partial update: `None` leaves the stored column untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<ItemName>,
    pub description: Option<String>,
}

impl ItemPatch {
    /// Build from raw request fields, rejecting a patch that changes nothing.
    ///
    /// `description: Some("")` is a real change (sets the empty string);
    /// there is no way to clear it back to null.
    pub fn new(name: Option<String>, description: Option<String>) -> Result<Self, ValidationError> {
        if name.is_none() && description.is_none() {
            return Err(ValidationError::NoFields);
        }

        Ok(Self {
            name: name.map(ItemName::new).transpose()?,
            description,
        })
    }

    /// True if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
