//! Category and role configuration
//!
//! A process-wide, read-only directory mapping each organizational category
//! to its ordered list of roles. Loaded once at startup and shared by
//! reference; issuance validates every (category, role) pair against it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{RoleTableError, ValidationError};

/// One category and its ordered role list.
///
/// The serde shape is the deployment file format: a JSON array of
/// `{"name": ..., "roles": [...]}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRoles {
    pub name: String,
    pub roles: Vec<String>,
}

/// Read-only category → role-list directory.
#[derive(Debug, Clone)]
pub struct RoleDirectory {
    categories: Vec<CategoryRoles>,
}

impl RoleDirectory {
    /// Build a directory, enforcing the configuration invariants: at least
    /// one category, at least one role per category, no blank or duplicate
    /// names.
    pub fn new(categories: Vec<CategoryRoles>) -> Result<Self, RoleTableError> {
        if categories.is_empty() {
            return Err(RoleTableError::Empty);
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(RoleTableError::BlankName);
            }
            if !seen.insert(category.name.as_str()) {
                return Err(RoleTableError::DuplicateCategory(category.name.clone()));
            }
            if category.roles.is_empty() {
                return Err(RoleTableError::EmptyCategory(category.name.clone()));
            }
            if category.roles.iter().any(|role| role.trim().is_empty()) {
                return Err(RoleTableError::BlankName);
            }
        }

        Ok(Self { categories })
    }

    /// Configured categories, in configuration order.
    pub fn categories(&self) -> impl Iterator<Item = &CategoryRoles> {
        self.categories.iter()
    }

    /// Role list for a category, if the category is configured.
    pub fn roles_for(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|entry| entry.name == category)
            .map(|entry| entry.roles.as_slice())
    }

    /// Check that `role` is configured for `category`.
    pub fn check_membership(&self, category: &str, role: &str) -> Result<(), ValidationError> {
        let roles = self
            .roles_for(category)
            .ok_or_else(|| ValidationError::UnknownCategory(category.to_string()))?;

        if roles.iter().any(|configured| configured == role) {
            Ok(())
        } else {
            Err(ValidationError::RoleNotInCategory {
                role: role.to_string(),
                category: category.to_string(),
            })
        }
    }
}

impl Default for RoleDirectory {
    /// The built-in transit-operations table.
    fn default() -> Self {
        let categories = vec![
            CategoryRoles {
                name: "Central Command".to_string(),
                roles: vec![
                    "Managing Director".to_string(),
                    "Director of Finance".to_string(),
                    "Director of Operations".to_string(),
                ],
            },
            CategoryRoles {
                name: "Field Units".to_string(),
                roles: vec![
                    "Station Controller".to_string(),
                    "Depot Manager".to_string(),
                ],
            },
        ];

        // Invariants hold by inspection; skip the constructor checks.
        Self { categories }
    }
}
