#![doc(html_root_url = "https://docs.rs/oneof/0.1.0")]
#![cfg_attr(not(feature = "std"), no_std)]

//! Runtime support for `oneof` groups in generated Protocol Buffers messages.
//!
//! A oneof group is a set of mutually exclusive fields: setting one member
//! un-sets whichever member was active before. Generated code declares each
//! group as an enum with one variant per member (see [`Oneof`]) plus a case
//! enumeration with a `NOT_SET` sentinel (see [`Case`]), and stores the group
//! in a [`OneofGroup`].
//!
//! Messages come in two views: an immutable built value implementing
//! [`Message`], and a mutable [`Builder`] which snapshots into a new value on
//! every build.

// Re-export the alloc crate for use within generated code.
#[doc(hidden)]
pub extern crate alloc;

// Re-export the bytes crate for use within generated code.
pub use bytes;

mod case;
mod error;
mod group;
mod message;
mod open_enum;

pub use crate::case::Case;
pub use crate::error::{UninitializedMessageError, UnknownEnumValue};
pub use crate::group::{Oneof, OneofGroup};
pub use crate::message::{Builder, Message};
pub use crate::open_enum::{OpenEnum, Unknown};

// Re-export #[derive(Enumeration, Oneof)].
#[cfg(feature = "derive")]
#[doc(hidden)]
pub use oneof_derive::*;
