// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Service**: Location of the generation service
//! - **Resolutions**: Offered and initially checked resolution options

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Base URL of the generation service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path of the multipart upload endpoint, relative to the base URL.
pub const DEFAULT_UPLOAD_PATH: &str = "/upload";

/// Path of the health probe, relative to the base URL.
pub const DEFAULT_HEALTH_PATH: &str = "/healthz";

// ==========================================================================
// Resolution Defaults
// ==========================================================================

/// Resolution options offered in the picker, in display order.
pub const DEFAULT_RESOLUTIONS: &[&str] = &[
    "1366x768",
    "1920x1080",
    "2560x1440",
    "3840x2160",
    "1080x2400",
    "1440x3200",
];

/// Options checked when the window opens.
pub const DEFAULT_CHECKED_RESOLUTIONS: &[&str] = &["1920x1080", "2560x1440"];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = {
    assert!(!DEFAULT_RESOLUTIONS.is_empty());
    assert!(!DEFAULT_CHECKED_RESOLUTIONS.is_empty());

    // Every initially checked option must be offered
    let mut i = 0;
    while i < DEFAULT_CHECKED_RESOLUTIONS.len() {
        let mut found = false;
        let mut j = 0;
        while j < DEFAULT_RESOLUTIONS.len() {
            if str_eq(DEFAULT_CHECKED_RESOLUTIONS[i], DEFAULT_RESOLUTIONS[j]) {
                found = true;
            }
            j += 1;
        }
        assert!(found);
        i += 1;
    }
};
