//! Errors reported by generated message code.

use alloc::vec::Vec;
use core::error::Error;
use core::fmt;

/// An integer that names no variant of a case enumeration.
///
/// Returned by the `TryFrom<i32>` conversion of derived case enumerations. The
/// lookup never maps an unrecognized number onto the `NOT_SET` sentinel or
/// onto an arbitrary member.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownEnumValue(pub i32);

impl fmt::Display for UnknownEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown enumeration value {}", self.0)
    }
}

impl Error for UnknownEnumValue {}

/// A checked build was attempted on a builder with unset required fields.
///
/// The builder is left untouched; `build_partial` can still be used to take a
/// snapshot without validation.
#[derive(Clone, PartialEq, Eq)]
pub struct UninitializedMessageError {
    message: &'static str,
    missing: Vec<&'static str>,
}

impl UninitializedMessageError {
    /// Creates an error for the message with the given fully-qualified name.
    ///
    /// Meant to be used by generated code.
    #[doc(hidden)]
    #[cold]
    pub fn new(message: &'static str, missing: Vec<&'static str>) -> Self {
        Self { message, missing }
    }

    /// The fully-qualified name of the message that failed to build.
    pub fn message_name(&self) -> &'static str {
        self.message
    }

    /// The names of the required fields which were not set, in declaration
    /// order.
    pub fn missing_fields(&self) -> &[&'static str] {
        &self.missing
    }
}

impl fmt::Debug for UninitializedMessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UninitializedMessageError")
            .field("message", &self.message)
            .field("missing", &self.missing)
            .finish()
    }
}

impl fmt::Display for UninitializedMessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "message {} is missing required fields: ", self.message)?;
        for (i, field) in self.missing.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field)?;
        }
        Ok(())
    }
}

impl Error for UninitializedMessageError {}
