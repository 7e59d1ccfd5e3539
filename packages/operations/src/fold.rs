//! Case-fold policy inference from the destination's observed casing.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use dcim_sync_index::DirectoryIndex;
use dcim_sync_naming::CaseFold;

/// Decide how destination-bound names are folded.
///
/// Rules, first match wins:
///
/// 1. destination has no uppercase letters anywhere, or `force_lower`
///    -> [`CaseFold::Lower`]
/// 2. destination has no lowercase letters anywhere, or `force_upper`
///    -> [`CaseFold::Upper`]
/// 3. otherwise -> [`CaseFold::Identity`]
///
/// An all-lowercase (or empty, or letterless) destination signals a
/// lowercase-convention filesystem; mixed-case destinations are left alone
/// unless overridden. The overrides are mutually exclusive at the CLI; if a
/// caller sets both anyway, `force_lower` wins because rule 1 is evaluated
/// first.
#[must_use]
pub fn choose_case_fold(dest: &DirectoryIndex, force_lower: bool, force_upper: bool) -> CaseFold {
    if force_lower || !dest.has_uppercase() {
        CaseFold::Lower
    } else if force_upper || !dest.has_lowercase() {
        CaseFold::Upper
    } else {
        CaseFold::Identity
    }
}
