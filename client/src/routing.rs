//! Static route table and the matcher that evaluates it.
//!
//! DESIGN
//! ======
//! Routes are plain data: an ordered slice of `(pattern, exact, page)`
//! entries. A single generic matcher walks the slice and the first entry
//! that matches wins, so adding a page is a one-line table change.
//!
//! There is no catch-all entry. A path that matches nothing yields `None`
//! and the shell renders an empty body.

#[cfg(test)]
#[path = "routing_test.rs"]
mod tests;

/// Page components reachable from the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Homepage,
    Upload,
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern, always starting with `/`.
    pub pattern: &'static str,
    /// When `true` the whole path must equal `pattern`.
    pub exact: bool,
    /// Page rendered when this entry is selected.
    pub page: Page,
}

impl RouteEntry {
    /// Test a single entry against `path`.
    ///
    /// Exact entries require full string equality. Prefix entries match the
    /// pattern itself or any path continuing it at a `/` segment boundary.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        if self.exact {
            return path == self.pattern;
        }
        if path == self.pattern {
            return true;
        }
        if self.pattern == "/" {
            return path.starts_with('/');
        }
        path.strip_prefix(self.pattern)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Application route table, evaluated in declaration order.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { pattern: "/", exact: true, page: Page::Homepage },
    RouteEntry { pattern: "/upload", exact: true, page: Page::Upload },
];

/// Select the page for `path`: first matching entry wins.
#[must_use]
pub fn match_route(table: &[RouteEntry], path: &str) -> Option<Page> {
    table
        .iter()
        .find(|entry| entry.matches(path))
        .map(|entry| entry.page)
}
