//! Size limits applied by the task service.

use crate::task::domain::{TaskTitle, TaskValidationError};

/// Configuration for service-level task validation.
///
/// Lengths are counted in characters (Unicode scalar values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLimits {
    /// Maximum title length.
    pub max_title_chars: usize,
    /// Maximum description length.
    pub max_description_chars: usize,
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self {
            max_title_chars: 200,
            max_description_chars: 10_000,
        }
    }
}

impl TaskLimits {
    /// Creates a configuration without length limits.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_title_chars: usize::MAX,
            max_description_chars: usize::MAX,
        }
    }

    /// Creates a configuration with reduced limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_chars: 80,
            max_description_chars: 1_000,
        }
    }

    /// Checks a title against the configured limit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::TitleTooLong`] when the title is longer
    /// than `max_title_chars`.
    pub fn check_title(&self, title: &TaskTitle) -> Result<(), TaskValidationError> {
        let actual = title.char_count();
        if actual > self.max_title_chars {
            return Err(TaskValidationError::TitleTooLong {
                max: self.max_title_chars,
                actual,
            });
        }
        Ok(())
    }

    /// Checks an optional description against the configured limit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::DescriptionTooLong`] when the
    /// description is longer than `max_description_chars`.
    pub fn check_description(&self, description: Option<&str>) -> Result<(), TaskValidationError> {
        let actual = description.map_or(0, |text| text.chars().count());
        if actual > self.max_description_chars {
            return Err(TaskValidationError::DescriptionTooLong {
                max: self.max_description_chars,
                actual,
            });
        }
        Ok(())
    }
}
