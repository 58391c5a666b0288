//! Vendored-code filter
//!
//! Declarations coming from dependency trees are dropped before any pragma
//! lookup happens. A path is vendored when it contains one of the marker
//! substrings; a missing path is never vendored.

/// Marker used when no other markers are configured
pub const DEFAULT_VENDOR_MARKER: &str = "node_modules";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorFilter {
    markers: Vec<String>,
}

impl VendorFilter {
    /// Filter with the default marker plus `extra` markers
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filter = Self::default();
        for marker in extra {
            filter.add_marker(marker);
        }
        filter
    }

    pub fn add_marker(&mut self, marker: impl Into<String>) {
        let marker = marker.into();
        if !marker.is_empty() && !self.markers.contains(&marker) {
            self.markers.push(marker);
        }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Check whether a declaration at `path` must be left out of the report
    pub fn is_excluded(&self, path: Option<&str>) -> bool {
        match path {
            Some(path) => self.markers.iter().any(|m| path.contains(m.as_str())),
            None => false,
        }
    }
}

impl Default for VendorFilter {
    fn default() -> Self {
        Self {
            markers: vec![DEFAULT_VENDOR_MARKER.to_string()],
        }
    }
}
