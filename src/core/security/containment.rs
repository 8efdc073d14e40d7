use std::path::{Component, Path, PathBuf};

/// Errors that can occur during containment validation.
///
/// All variants are expected, recoverable outcomes for untrusted input.
/// Callers surface them as a generic access-denied condition; the rejected
/// fragment must never be echoed back to the requester.
#[derive(Debug, thiserror::Error)]
pub enum ContainmentError {
    #[error("path resolves outside the base directory")]
    OutsideBase,

    #[error("absolute paths are not allowed")]
    AbsoluteFragment,

    #[error("fragment contains characters that cannot form a path")]
    MalformedFragment,

    #[error("base directory '{0}' is not absolute")]
    RelativeBase(PathBuf),
}

/// Validates that untrusted path fragments stay within a trusted base
/// directory.
///
/// The check is purely lexical: `.` and `..` segments are resolved by
/// component walking without touching the filesystem, so symlinks are
/// deliberately not followed. Validation is a pure decision function with
/// no side effects and no shared state, safe to call concurrently.
///
/// The prefix comparison is segment-bounded (`Path::starts_with` compares
/// whole components), so a base of `/srv/static/images` does not accept a
/// resolved path under `/srv/static/images-evil`.
#[derive(Debug, Clone)]
pub struct Containment {
    base: PathBuf,
}

impl Containment {
    /// Create a validator rooted at `base`.
    ///
    /// `base` is trusted operator configuration, never user input. It must
    /// be absolute; a relative base is a configuration error reported at
    /// construction time.
    pub fn new(base: impl Into<PathBuf>) -> Result<Self, ContainmentError> {
        let base = base.into();
        if !base.is_absolute() {
            return Err(ContainmentError::RelativeBase(base));
        }
        Ok(Self {
            base: normalize(&base),
        })
    }

    /// The normalized base directory this validator is rooted at.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Validate an untrusted fragment against the base directory.
    ///
    /// Joins `base` and `fragment`, lexically normalizes the result, and
    /// accepts it only if it is the base itself or a descendant of it.
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - The normalized resolved path, safe to open.
    /// * `Err(ContainmentError)` - The fragment escapes containment, is
    ///   absolute, or cannot form a path.
    pub fn validate(&self, fragment: &str) -> Result<PathBuf, ContainmentError> {
        // Embedded NUL bytes cannot appear in a host path; reject rather
        // than crash downstream in the syscall layer.
        if fragment.contains('\0') {
            return Err(ContainmentError::MalformedFragment);
        }

        // An absolute fragment would replace the base under platform join
        // semantics. Required reject, never silently inherited.
        let fragment_path = Path::new(fragment);
        if fragment_path.has_root()
            || fragment_path
                .components()
                .any(|c| matches!(c, Component::Prefix(_)))
        {
            return Err(ContainmentError::AbsoluteFragment);
        }

        let resolved = normalize(&self.base.join(fragment_path));

        if !resolved.starts_with(&self.base) {
            return Err(ContainmentError::OutsideBase);
        }

        Ok(resolved)
    }
}

/// Lexically normalize a path: drop `.` segments and resolve `..` against
/// the components accumulated so far. No filesystem access.
///
/// A `..` that would pop past the root is dropped, matching lexical
/// normalization semantics; such paths still fail the containment check
/// unless the base is the root itself.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Keep the root anchor; only pop normal components.
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> Containment {
        Containment::new("/server/static/images").unwrap()
    }

    #[test]
    fn test_plain_fragment_resolves_under_base() {
        let result = images().validate("cat.png").unwrap();
        assert_eq!(result, PathBuf::from("/server/static/images/cat.png"));
    }

    #[test]
    fn test_nested_fragment_resolves_under_base() {
        let result = images().validate("thumbs/small/cat.png").unwrap();
        assert_eq!(
            result,
            PathBuf::from("/server/static/images/thumbs/small/cat.png")
        );
    }

    #[test]
    fn test_internal_parent_segments_are_resolved() {
        let result = images().validate("sub/../cat.png").unwrap();
        assert_eq!(result, PathBuf::from("/server/static/images/cat.png"));
    }

    #[test]
    fn test_dot_resolves_to_base_itself() {
        let result = images().validate(".").unwrap();
        assert_eq!(result, PathBuf::from("/server/static/images"));
    }

    #[test]
    fn test_traversal_escape_rejected() {
        assert!(matches!(
            images().validate("../../etc/passwd"),
            Err(ContainmentError::OutsideBase)
        ));
    }

    #[test]
    fn test_single_parent_escape_rejected() {
        assert!(matches!(
            images().validate(".."),
            Err(ContainmentError::OutsideBase)
        ));
    }

    #[test]
    fn test_deep_traversal_past_root_rejected() {
        assert!(matches!(
            images().validate("../../../../../../../../etc/passwd"),
            Err(ContainmentError::OutsideBase)
        ));
    }

    #[test]
    fn test_sibling_prefix_bypass_rejected() {
        // `/server/static/images-evil/secret` passes a naive string
        // startswith check against `/server/static/images`; the
        // segment-bounded comparison must not.
        assert!(matches!(
            images().validate("../images-evil/secret"),
            Err(ContainmentError::OutsideBase)
        ));
    }

    #[test]
    fn test_absolute_fragment_rejected() {
        assert!(matches!(
            images().validate("/etc/passwd"),
            Err(ContainmentError::AbsoluteFragment)
        ));
    }

    #[test]
    fn test_nul_byte_rejected() {
        assert!(matches!(
            images().validate("cat.png\0.jpg"),
            Err(ContainmentError::MalformedFragment)
        ));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let containment = images();
        let first = containment.validate("sub/../cat.png").unwrap();
        let second = containment.validate("sub/../cat.png").unwrap();
        assert_eq!(first, second);

        assert!(containment.validate("../../etc/passwd").is_err());
        assert!(containment.validate("../../etc/passwd").is_err());
    }

    #[test]
    fn test_relative_base_rejected_at_construction() {
        assert!(Containment::new("static/images").is_err());
    }

    #[test]
    fn test_base_with_trailing_dot_segments_normalized() {
        let containment = Containment::new("/server/static/images/./sub/..").unwrap();
        assert_eq!(containment.base(), Path::new("/server/static/images"));
    }
}
