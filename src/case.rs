use core::fmt::Debug;
use core::hash::Hash;

/// The case enumeration of a oneof group.
///
/// Every group has one case per member field plus a `NOT_SET` sentinel which
/// is numbered `0`. Case enumerations are usually derived with
/// `#[derive(Enumeration)]`, marking the sentinel variant with
/// `#[oneof(not_set)]`.
pub trait Case: Copy + Eq + Hash + Debug + Default + Into<i32> + Send + Sync + 'static {
    /// The case reported by a group with no member set.
    const NOT_SET: Self;

    /// Returns the case numbered `number`, or `None` if neither a member nor
    /// the sentinel carries that number.
    fn for_number(number: i32) -> Option<Self>;

    /// Returns the field number of this case, `0` for `NOT_SET`.
    fn number(self) -> i32 {
        self.into()
    }

    /// Returns `true` unless this is the `NOT_SET` sentinel.
    fn is_set(self) -> bool {
        self != Self::NOT_SET
    }
}
