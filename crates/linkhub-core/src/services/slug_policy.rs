// ============================================================================
// LinkHub Core - Slug Policy
// File: crates/linkhub-core/src/services/slug_policy.rs
// ============================================================================
//! Slug admission rules: length, charset, reservation

use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::error::DomainError;
use crate::ports::ReservedKeyStore;
use linkhub_shared::constants::{is_default_redirect, MAX_SLUG_LENGTH};

static VALID_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").expect("valid slug pattern"));

/// First rule a candidate slug violates, if any. Rules are evaluated in a
/// fixed order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugViolation {
    TooLong,
    InvalidFormat,
    Reserved,
}

impl SlugViolation {
    pub fn message(&self) -> &'static str {
        match self {
            SlugViolation::TooLong => "Slug must be less than 48 characters",
            SlugViolation::InvalidFormat => "Invalid slug",
            SlugViolation::Reserved => "Cannot use reserved slugs",
        }
    }
}

/// Checks candidate slugs against length, charset, and reservation rules.
///
/// The reserved-key store is injected so tests can substitute it. Length
/// and charset are checked synchronously first; the reservation lookup is
/// a remote fetch and is never performed once an earlier rule has failed.
pub struct SlugPolicy {
    reserved: Arc<dyn ReservedKeyStore>,
}

impl SlugPolicy {
    pub fn new(reserved: Arc<dyn ReservedKeyStore>) -> Self {
        Self { reserved }
    }

    /// Returns the first violated rule, or `None` when the slug is
    /// acceptable. No side effects.
    pub async fn check(&self, slug: &str) -> Result<Option<SlugViolation>, DomainError> {
        // 1. Length, synchronous
        if slug.chars().count() > MAX_SLUG_LENGTH {
            return Ok(Some(SlugViolation::TooLong));
        }

        // 2. Charset/shape, synchronous
        if !VALID_SLUG.is_match(slug) {
            return Ok(Some(SlugViolation::InvalidFormat));
        }

        // 3. Reservation: dynamic store first, then the static redirect map
        if self.reserved.is_reserved(slug).await? || is_default_redirect(slug) {
            return Ok(Some(SlugViolation::Reserved));
        }

        Ok(None)
    }
}
