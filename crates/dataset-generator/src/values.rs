//! Fixed values used for test objects created in the catalog.

use serde::{Deserialize, Serialize};

/// Prefix every test object name starts with.
pub const DEFAULT_TEST_PREFIX: &str = "zzztest";

/// `choices_helper` whose options are the catalog's organizations.
pub const ORGANIZATION_CHOICES_HELPER: &str = "edc_orgs_form";

/// Names of the test objects the generator refers to.
///
/// Object names embed a short tag of the person running the tests so several
/// developers can share one catalog without name clashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestValues {
    /// Prefix of every test object name
    pub prefix: String,
    /// Short user tag (first three letters of the login, lowercase)
    pub user: String,
    /// Organization test packages are created under
    pub organization: String,
    /// Package (dataset) name, used for the `dataset_slug` preset
    pub package: String,
    /// Resource name
    pub resource: String,
    /// Title given to generated datasets
    pub title: String,
}

impl TestValues {
    /// Derive all names from a prefix and a login name.
    pub fn new(prefix: &str, login: &str) -> Self {
        let user = user_tag(login);
        Self {
            organization: format!("{prefix}_{user}_testorg"),
            package: format!("{prefix}_{user}_testpkg"),
            resource: format!("{prefix}_{user}_testresource"),
            title: format!("{prefix} {user} test dataset"),
            prefix: prefix.to_string(),
            user,
        }
    }

    /// Names for the login running the process (`USER` / `USERNAME`).
    pub fn for_current_user(prefix: &str) -> Self {
        Self::new(prefix, &current_login())
    }
}

/// Login name of the current process owner, `tester` when unknown.
pub fn current_login() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|login| !login.trim().is_empty())
        .unwrap_or_else(|| "tester".to_string())
}

/// First three characters of a login name, lowercased.
pub fn user_tag(login: &str) -> String {
    login.trim().chars().take(3).collect::<String>().to_lowercase()
}
