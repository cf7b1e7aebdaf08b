//! Partial UPDATE statement construction
//!
//! Maps the fields present in an `ItemPatch` to `(column, placeholder)`
//! pairs in a fixed column order, numbering placeholders from `$1`. The id
//! always takes the last placeholder. Values are returned separately so
//! they are bound, never spliced into the SQL.

use crate::models::ItemPatch;

const RETURNING: &str = "RETURNING id, name, description";

/// A rendered `UPDATE items ...` statement and its bind values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    assignments: Vec<(&'static str, String)>,
    params: Vec<String>,
    id_placeholder: String,
}

impl UpdateStatement {
    /// Build the statement for `patch`, or `None` if it changes nothing.
    pub fn build(patch: &ItemPatch) -> Option<Self> {
        let fields = [
            ("name", patch.name.as_ref().map(|n| n.as_str())),
            ("description", patch.description.as_deref()),
        ];

        let mut assignments = Vec::new();
        let mut params = Vec::new();
        for (column, value) in fields {
            if let Some(value) = value {
                params.push(value.to_owned());
                assignments.push((column, format!("${}", params.len())));
            }
        }

        if assignments.is_empty() {
            return None;
        }

        let id_placeholder = format!("${}", params.len() + 1);
        Some(Self {
            assignments,
            params,
            id_placeholder,
        })
    }

    /// Column/placeholder pairs in SET order.
    pub fn assignments(&self) -> &[(&'static str, String)] {
        &self.assignments
    }

    /// Values to bind, in placeholder order (the id is bound after these).
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn into_params(self) -> Vec<String> {
        self.params
    }

    /// Render the SQL text.
    pub fn sql(&self) -> String {
        let set = self
            .assignments
            .iter()
            .map(|(column, placeholder)| format!("{} = {}", column, placeholder))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "UPDATE items SET {} WHERE id = {} {}",
            set, self.id_placeholder, RETURNING
        )
    }
}
