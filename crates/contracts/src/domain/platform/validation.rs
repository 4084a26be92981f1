//! Field validation for the platform dialog.
//!
//! Pure functions: no I/O, deterministic, shared by the dialog (primary
//! validation site) and the backend service (defense before writing).

use crate::domain::platform::aggregate::{Platform, PlatformForm};
use crate::enums::platform_kind::{IdRule, PlatformKind};

/// Field-level errors of the platform form, one slot per input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformFieldErrors {
    pub platform: Option<String>,
    pub platform_name: Option<String>,
    pub platform_id: Option<String>,
    pub standardized_name: Option<String>,
}

impl PlatformFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.platform.is_none()
            && self.platform_name.is_none()
            && self.platform_id.is_none()
            && self.standardized_name.is_none()
    }

    /// All present messages joined, for logs and transport.
    pub fn summary(&self) -> String {
        [
            &self.platform,
            &self.platform_name,
            &self.platform_id,
            &self.standardized_name,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join("; ")
    }
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: PlatformFieldErrors,
}

pub fn validate_platform(platform: &str) -> Option<String> {
    if platform.trim().is_empty() {
        return Some("Platform is required".to_string());
    }
    if PlatformKind::from_name(platform).is_none() {
        return Some(format!(
            "Platform must be one of: {}",
            PlatformKind::allowed_names()
        ));
    }
    None
}

/// Checks the id against the platform's `IdRule`. Unknown platform values
/// impose no format constraint; the enum check reports those separately.
pub fn validate_platform_id(platform_id: &str, platform: &str) -> Option<String> {
    if platform_id.trim().is_empty() {
        return Some("Platform ID is required".to_string());
    }

    let rule = PlatformKind::from_name(platform)
        .map(|kind| kind.id_rule())
        .unwrap_or(IdRule::Any);

    match rule {
        IdRule::Any => None,
        IdRule::ChannelId { prefix, len } => {
            if !platform_id.starts_with(prefix) {
                return Some(format!(
                    "{platform} Platform ID must start with \"{prefix}\""
                ));
            }
            if platform_id.chars().count() != len {
                return Some(format!(
                    "{platform} Platform ID must be exactly {len} characters"
                ));
            }
            None
        }
    }
}

/// Duplicate check against the currently known platforms.
///
/// `current` carries the id of the record being edited so a record never
/// collides with itself; it is `None` in create mode.
pub fn check_duplicate_platform_id(
    platform_id: &str,
    existing: &[Platform],
    current: Option<&str>,
) -> Option<String> {
    let duplicate = existing
        .iter()
        .any(|p| p.platform_id == platform_id && current != Some(p.platform_id.as_str()));
    duplicate.then(|| "Platform ID already exists".to_string())
}

/// Validates the whole form and aggregates every failure into one error set.
///
/// The duplicate check runs only when the id format check passed, so a
/// malformed id is never also reported as a duplicate.
pub fn validate_platform_form(
    form: &PlatformForm,
    existing: &[Platform],
    is_edit: bool,
) -> ValidationOutcome {
    let mut errors = PlatformFieldErrors {
        platform: validate_platform(&form.platform),
        ..Default::default()
    };

    if form.platform_name.trim().is_empty() {
        errors.platform_name = Some("Platform Name is required".to_string());
    }

    errors.platform_id = validate_platform_id(&form.platform_id, &form.platform);
    if errors.platform_id.is_none() {
        let current = is_edit.then(|| form.platform_id.as_str());
        errors.platform_id = check_duplicate_platform_id(&form.platform_id, existing, current);
    }

    if form.standardized_name.trim().is_empty() {
        errors.standardized_name = Some("Standardized Name is required".to_string());
    }

    ValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(id: &str) -> Platform {
        Platform {
            platform_id: id.to_string(),
            platform: "YouTube".to_string(),
            platform_name: "Some Channel".to_string(),
            standardized_name: "some-channel".to_string(),
        }
    }

    fn youtube_form(id: &str, name: &str) -> PlatformForm {
        PlatformForm {
            platform_id: id.to_string(),
            platform: "YouTube".to_string(),
            platform_name: name.to_string(),
            standardized_name: "some-channel".to_string(),
        }
    }

    #[test]
    fn platform_must_not_be_blank() {
        assert_eq!(
            validate_platform(""),
            Some("Platform is required".to_string())
        );
        assert_eq!(
            validate_platform("   "),
            Some("Platform is required".to_string())
        );
    }

    #[test]
    fn platform_outside_the_closed_set_lists_all_allowed_values() {
        let err = validate_platform("TikTok").unwrap();
        assert_eq!(
            err,
            "Platform must be one of: YouTube, Facebook, Spotify, ARD Audiothek"
        );
    }

    #[test]
    fn every_allowed_platform_passes() {
        for name in ["YouTube", "Facebook", "Spotify", "ARD Audiothek"] {
            assert_eq!(validate_platform(name), None);
        }
    }

    #[test]
    fn id_is_required_for_every_platform() {
        assert!(validate_platform_id("", "YouTube").is_some());
        assert!(validate_platform_id("  ", "Spotify").is_some());
    }

    #[test]
    fn youtube_id_needs_uc_prefix_and_exact_length() {
        // 24 chars with the right prefix
        assert_eq!(
            validate_platform_id("UC1234567890123456789012", "YouTube"),
            None
        );
        // too short
        assert_eq!(
            validate_platform_id("UC123", "YouTube"),
            Some("YouTube Platform ID must be exactly 24 characters".to_string())
        );
        // wrong prefix, right length
        assert_eq!(
            validate_platform_id("XX1234567890123456789012", "YouTube"),
            Some("YouTube Platform ID must start with \"UC\"".to_string())
        );
    }

    #[test]
    fn non_youtube_platforms_accept_any_non_blank_id() {
        for name in ["Facebook", "Spotify", "ARD Audiothek"] {
            assert_eq!(validate_platform_id("x", name), None);
            assert_eq!(validate_platform_id("whatever-id-shape", name), None);
        }
    }

    #[test]
    fn duplicate_id_is_rejected_in_create_mode() {
        let existing = vec![platform("P1")];
        assert_eq!(
            check_duplicate_platform_id("P1", &existing, None),
            Some("Platform ID already exists".to_string())
        );
    }

    #[test]
    fn edit_mode_excludes_the_record_itself() {
        let existing = vec![platform("P1")];
        assert_eq!(check_duplicate_platform_id("P1", &existing, Some("P1")), None);
        // a different record with that id still collides
        let existing = vec![platform("P1"), platform("P2")];
        assert!(check_duplicate_platform_id("P1", &existing, Some("P2")).is_some());
    }

    #[test]
    fn form_with_only_a_missing_name_reports_exactly_that_field() {
        let form = youtube_form("UC1234567890123456789012", "");
        let outcome = validate_platform_form(&form, &[], false);
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.errors.platform_name,
            Some("Platform Name is required".to_string())
        );
        assert_eq!(outcome.errors.platform, None);
        assert_eq!(outcome.errors.platform_id, None);
        assert_eq!(outcome.errors.standardized_name, None);
    }

    #[test]
    fn malformed_id_is_never_also_reported_as_duplicate() {
        let existing = vec![platform("UC123")];
        let form = youtube_form("UC123", "Name");
        let outcome = validate_platform_form(&form, &existing, false);
        assert_eq!(
            outcome.errors.platform_id,
            Some("YouTube Platform ID must be exactly 24 characters".to_string())
        );
    }

    #[test]
    fn unchanged_edit_re_validates_clean() {
        let existing = vec![platform("UC1234567890123456789012")];
        let form = PlatformForm::from_record(&existing[0]);
        let outcome = validate_platform_form(&form, &existing, true);
        assert!(outcome.is_valid);
    }

    #[test]
    fn all_failures_aggregate_into_one_error_set() {
        let form = PlatformForm::default();
        let outcome = validate_platform_form(&form, &[], false);
        assert!(!outcome.is_valid);
        assert!(outcome.errors.platform.is_some());
        assert!(outcome.errors.platform_name.is_some());
        assert!(outcome.errors.platform_id.is_some());
        assert!(outcome.errors.standardized_name.is_some());
        assert_eq!(outcome.errors.summary().matches("; ").count(), 3);
    }
}
