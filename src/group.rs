//! Storage for a single oneof group.

use core::fmt;

use log::trace;

use crate::Case;

/// The members of a oneof group, one enum variant per member field.
///
/// Each variant holds the member's value, so the active case is always
/// derived from the stored value and can never disagree with it. Usually
/// derived with `#[derive(Oneof)]`.
pub trait Oneof: Clone + PartialEq + fmt::Debug + Send + Sync {
    /// The case enumeration of the group.
    type Case: Case;

    /// Fully-qualified name of the group, used in diagnostics.
    const NAME: &'static str;

    /// Returns the case of this member, never `NOT_SET`.
    fn case(&self) -> Self::Case;
}

/// A oneof group: at most one member of `O` is set at any time.
///
/// Setting a member replaces whichever member was set before, without the
/// caller clearing it first. Clearing a member that is not the active one does
/// nothing. Reads never fail; generated getters fall back to a member's
/// declared default when [`member`](Self::member) comes back empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OneofGroup<O> {
    active: Option<O>,
}

impl<O> OneofGroup<O> {
    /// Creates a group with no member set.
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Returns the active member, if any.
    pub fn get(&self) -> Option<&O> {
        self.active.as_ref()
    }

    /// Returns `true` if no member is set.
    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }

    /// Consumes the group, returning the active member.
    pub fn into_inner(self) -> Option<O> {
        self.active
    }
}

impl<O> OneofGroup<O>
where
    O: Oneof,
{
    /// Returns the case of the active member, or `NOT_SET`.
    pub fn case(&self) -> O::Case {
        match self.active {
            Some(ref member) => member.case(),
            None => O::Case::NOT_SET,
        }
    }

    /// Returns `true` if `case` is the group's current case.
    ///
    /// `has(NOT_SET)` is `true` exactly when the group is empty.
    pub fn has(&self, case: O::Case) -> bool {
        self.case() == case
    }

    /// Makes `member` the active member, returning the member it displaced.
    pub fn set(&mut self, member: impl Into<O>) -> Option<O> {
        let member = member.into();
        let case = member.case();
        let displaced = self.active.replace(member);
        if let Some(ref displaced) = displaced {
            trace!(
                "{}: {:?} displaced by {:?}",
                O::NAME,
                displaced.case(),
                case
            );
        }
        displaced
    }

    /// Clears the group if `case` is the active case, returning the removed
    /// member. Any other case leaves the group untouched.
    pub fn clear_member(&mut self, case: O::Case) -> Option<O> {
        if self.active.is_some() && self.has(case) {
            return self.active.take();
        }
        if case.is_set() {
            trace!(
                "{}: clear of inactive {:?} ignored (case is {:?})",
                O::NAME,
                case,
                self.case()
            );
        }
        None
    }

    /// Clears the group unconditionally, returning the removed member.
    pub fn clear(&mut self) -> Option<O> {
        self.active.take()
    }

    /// Projects the active member through `project`.
    ///
    /// Generated getters pass a closure matching their own variant, so the
    /// result is `None` whenever another member (or none) is set.
    pub fn member<'a, T, F>(&'a self, project: F) -> Option<&'a T>
    where
        T: ?Sized,
        F: FnOnce(&'a O) -> Option<&'a T>,
    {
        self.active.as_ref().and_then(project)
    }

    /// Mutable counterpart of [`member`](Self::member).
    pub fn member_mut<'a, T, F>(&'a mut self, project: F) -> Option<&'a mut T>
    where
        T: ?Sized,
        F: FnOnce(&'a mut O) -> Option<&'a mut T>,
    {
        self.active.as_mut().and_then(project)
    }
}

impl<O> Default for OneofGroup<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> From<O> for OneofGroup<O> {
    fn from(member: O) -> Self {
        Self {
            active: Some(member),
        }
    }
}

impl<O> From<Option<O>> for OneofGroup<O> {
    fn from(active: Option<O>) -> Self {
        Self { active }
    }
}

impl<O: fmt::Debug> fmt::Debug for OneofGroup<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.active {
            Some(ref member) => member.fmt(f),
            None => f.write_str("NotSet"),
        }
    }
}
