use core::fmt::Debug;

use log::debug;

use crate::UninitializedMessageError;

/// An immutable, built Protocol Buffers message.
///
/// Built messages are snapshots: mutating the builder that produced one never
/// changes it. Every message has a builder type, and converting either way is
/// a deep copy.
pub trait Message: Clone + PartialEq + Debug + Default + Send + Sync + 'static {
    /// The mutable counterpart of this message.
    type Builder: Builder<Message = Self>;

    /// Fully-qualified name of the message, e.g. `oneofs.TestProtoWithOneOfs`.
    const NAME: &'static str;

    /// Returns the shared instance with every field at its default.
    fn default_instance() -> &'static Self;

    /// Creates a builder with every field at its default.
    fn new_builder() -> Self::Builder {
        Self::Builder::default()
    }

    /// Creates a builder initialized with a copy of this message.
    fn to_builder(&self) -> Self::Builder {
        self.clone().into_builder()
    }

    /// Converts this message into a builder without copying.
    fn into_builder(self) -> Self::Builder;

    /// Returns the names of required fields which are unset, in declaration
    /// order. Messages without required fields use the default.
    fn missing_required_fields(&self) -> alloc::vec::Vec<&'static str> {
        alloc::vec::Vec::new()
    }

    /// Returns `true` if every required field is set.
    fn is_initialized(&self) -> bool {
        self.missing_required_fields().is_empty()
    }
}

/// The mutable view of a [`Message`].
///
/// Reads through a builder agree with reads through the message it builds.
pub trait Builder: Clone + PartialEq + Debug + Default + Send + Sync {
    /// The message produced by this builder.
    type Message: Message<Builder = Self>;

    /// Returns the builder's current state as a message.
    fn as_message(&self) -> &Self::Message;

    /// Returns a snapshot of the builder's current state, without checking
    /// required fields.
    fn build_partial(&self) -> Self::Message {
        self.as_message().clone()
    }

    /// Returns a snapshot of the builder's current state.
    ///
    /// Fails if a required field is unset; the builder is left untouched
    /// either way.
    fn build(&self) -> Result<Self::Message, UninitializedMessageError> {
        let message = self.as_message();
        let missing = message.missing_required_fields();
        if !missing.is_empty() {
            debug!(
                "refusing to build {}: missing {:?}",
                <Self::Message as Message>::NAME,
                missing
            );
            return Err(UninitializedMessageError::new(
                <Self::Message as Message>::NAME,
                missing,
            ));
        }
        Ok(message.clone())
    }

    /// Returns `true` if every required field is set.
    fn is_initialized(&self) -> bool {
        self.as_message().is_initialized()
    }

    /// Resets every field, including every oneof group, to its default.
    fn clear(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }
}
