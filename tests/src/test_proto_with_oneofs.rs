use oneof::Builder as _;

use crate::oneofs::test_proto_with_one_ofs::test_nested_proto_with_one_ofs::ANestedOneofCase;
use crate::oneofs::test_proto_with_one_ofs::{AOneofCase, AnotherOneofCase};
use crate::oneofs::TestProtoWithOneOfs;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.0001,
        "{actual} is not within 0.0001 of {expected}"
    );
}

/// Both views agree that `another_oneof` and the nested group are untouched.
fn assert_other_groups_not_set(proto: &TestProtoWithOneOfs) {
    assert_eq!(
        proto.another_oneof_case(),
        AnotherOneofCase::AnotheroneofNotSet
    );
    assert_eq!(
        proto.nested_proto_with_oneofs().a_nested_oneof_case(),
        ANestedOneofCase::AnestedoneofNotSet
    );
}

#[test]
fn nothing_set() {
    crate::init_logging();
    let mut builder = TestProtoWithOneOfs::new_builder();
    builder.set_required_string("str");
    let proto = builder.build().unwrap();

    assert_eq!(proto.required_string(), "str");
    assert_eq!(builder.required_string(), "str");
    assert_eq!(proto.a_oneof_case(), AOneofCase::AoneofNotSet);
    assert_eq!(builder.a_oneof_case(), AOneofCase::AoneofNotSet);
    assert_other_groups_not_set(&proto);
    assert_other_groups_not_set(&builder);
}

#[test]
fn single_field_set() {
    crate::init_logging();
    let mut builder = TestProtoWithOneOfs::new_builder();
    builder.set_required_string("str").set_a_bool(true);
    let proto = builder.build().unwrap();

    assert_eq!(proto.a_oneof_case(), AOneofCase::ABool);
    assert_eq!(builder.a_oneof_case(), AOneofCase::ABool);
    assert!(proto.a_bool());
    assert!(builder.a_bool());
    assert!(proto.has_a_bool());
    assert!(builder.has_a_bool());
    assert_other_groups_not_set(&proto);
    assert_other_groups_not_set(&builder);
}

#[test]
fn single_field_set_then_cleared() {
    crate::init_logging();
    let mut builder = TestProtoWithOneOfs::new_builder();
    builder
        .set_required_string("str")
        .set_a_bool(true)
        .clear_a_bool();
    let proto = builder.build().unwrap();

    assert_eq!(proto.required_string(), "str");
    assert_eq!(builder.required_string(), "str");
    assert_eq!(proto.a_oneof_case(), AOneofCase::AoneofNotSet);
    assert_eq!(builder.a_oneof_case(), AOneofCase::AoneofNotSet);
    assert!(!proto.a_bool());
    assert!(!proto.has_a_bool());
    assert_other_groups_not_set(&proto);
    assert_other_groups_not_set(&builder);
}

#[test]
fn multiple_fields_set() {
    crate::init_logging();
    let mut builder = TestProtoWithOneOfs::new_builder();
    builder
        .set_required_string("str")
        .set_a_bool(true)
        .set_double_with_default(0.0)
        .set_a_float(2.5);
    let proto = builder.build().unwrap();

    assert_eq!(proto.a_oneof_case(), AOneofCase::AFloat);
    assert_eq!(builder.a_oneof_case(), AOneofCase::AFloat);
    assert_close(proto.a_float().into(), 2.5);
    assert_close(builder.a_float().into(), 2.5);

    assert!(!proto.has_double_with_default());
    assert!(!builder.has_double_with_default());
    assert_close(proto.double_with_default(), 2.46);
    assert_close(builder.double_with_default(), 2.46);

    assert!(!proto.has_a_bool());
    assert!(!builder.has_a_bool());
    assert!(!proto.a_bool());
    assert!(!builder.a_bool());

    assert_other_groups_not_set(&proto);
    assert_other_groups_not_set(&builder);
}

#[test]
fn multiple_fields_set_then_cleared() {
    crate::init_logging();
    let mut builder = TestProtoWithOneOfs::new_builder();
    builder
        .set_required_string("str")
        .set_a_bool(true)
        .set_double_with_default(0.0)
        .set_a_float(2.5)
        .clear_a_float();
    let proto = builder.build().unwrap();

    assert_eq!(proto.a_oneof_case(), AOneofCase::AoneofNotSet);

    assert!(!proto.has_a_float());
    assert_close(proto.a_float().into(), 0.0);

    assert!(!proto.has_double_with_default());
    assert_close(proto.double_with_default(), 2.46);

    assert!(!proto.has_a_bool());
    assert!(!proto.a_bool());

    assert_other_groups_not_set(&proto);
    assert_other_groups_not_set(&builder);
}

#[test]
fn literal_transition_sequence() {
    crate::init_logging();
    let mut builder = TestProtoWithOneOfs::new_builder();

    builder.set_a_bool(true);
    assert_eq!(builder.a_oneof_case(), AOneofCase::ABool);

    builder.set_double_with_default(0.0);
    assert_eq!(builder.a_oneof_case(), AOneofCase::DoubleWithDefault);
    assert!(!builder.a_bool());
    // An explicit zero is still "set", and reads back as zero, not 2.46.
    assert!(builder.has_double_with_default());
    assert_close(builder.double_with_default(), 0.0);

    builder.set_a_float(2.5);
    assert_eq!(builder.a_oneof_case(), AOneofCase::AFloat);
    assert_close(builder.double_with_default(), 2.46);
    assert!(!builder.has_double_with_default());

    builder.clear_a_float();
    assert_eq!(builder.a_oneof_case(), AOneofCase::AoneofNotSet);
    assert_close(builder.a_float().into(), 0.0);
}

#[test]
fn clearing_overwritten_member_is_noop() {
    let mut builder = TestProtoWithOneOfs::new_builder();
    builder.set_a_bool(true).set_a_float(1.25);
    let before = builder.build_partial();

    builder.clear_a_bool();
    assert_eq!(builder.a_oneof_case(), AOneofCase::AFloat);
    assert_eq!(builder.build_partial(), before);

    builder.clear_double_with_default();
    assert_eq!(builder.a_oneof_case(), AOneofCase::AFloat);
    assert_close(builder.a_float().into(), 1.25);
}

#[test]
fn clear_group() {
    let mut builder = TestProtoWithOneOfs::new_builder();
    builder.set_double_with_default(9.0).set_a_string("kept");
    builder.clear_a_oneof();

    assert_eq!(builder.a_oneof_case(), AOneofCase::AoneofNotSet);
    assert_close(builder.double_with_default(), 2.46);
    assert_eq!(builder.another_oneof_case(), AnotherOneofCase::AString);
    assert_eq!(builder.a_string(), "kept");

    // Clearing an empty group is harmless.
    builder.clear_a_oneof();
    assert_eq!(builder.a_oneof_case(), AOneofCase::AoneofNotSet);
}

#[test]
fn groups_are_independent() {
    let mut builder = TestProtoWithOneOfs::new_builder();
    builder.set_a_bool(true).set_a_bytes(&b"\x01\x02"[..]);

    assert_eq!(builder.a_oneof_case(), AOneofCase::ABool);
    assert_eq!(builder.another_oneof_case(), AnotherOneofCase::ABytes);
    assert_eq!(builder.a_bytes(), b"\x01\x02");

    builder.clear_a_bool();
    assert_eq!(builder.another_oneof_case(), AnotherOneofCase::ABytes);

    builder.set_a_string("text").set_a_float(3.0);
    assert_eq!(builder.another_oneof_case(), AnotherOneofCase::AString);
    assert!(builder.a_bytes().is_empty());
    assert!(!builder.has_a_bytes());
    assert_eq!(builder.a_oneof_case(), AOneofCase::AFloat);
}

#[test]
fn unset_members_read_as_defaults() {
    let proto = TestProtoWithOneOfs::new_builder().build_partial();

    assert!(!proto.a_bool());
    assert_close(proto.double_with_default(), 2.46);
    assert_close(proto.a_float().into(), 0.0);
    assert_eq!(proto.a_string(), "");
    assert!(proto.a_bytes().is_empty());
    assert_eq!(
        proto.a_message().a_nested_oneof_case(),
        ANestedOneofCase::AnestedoneofNotSet
    );
    assert!(!proto.has_a_message());
    assert_eq!(proto.required_string(), "");
    assert!(!proto.has_required_string());
    assert_eq!(&proto, <TestProtoWithOneOfs as oneof::Message>::default_instance());
}

#[test]
fn build_is_a_snapshot() {
    let mut builder = TestProtoWithOneOfs::new_builder();
    builder.set_required_string("str").set_a_bool(true);
    let first = builder.build().unwrap();

    builder.set_a_float(2.5).set_a_string("later");
    let second = builder.build().unwrap();

    assert_eq!(first.a_oneof_case(), AOneofCase::ABool);
    assert!(first.a_bool());
    assert_eq!(first.another_oneof_case(), AnotherOneofCase::AnotheroneofNotSet);
    assert_eq!(second.a_oneof_case(), AOneofCase::AFloat);
    assert_eq!(second.a_string(), "later");

    builder.clear();
    assert_eq!(first.a_oneof_case(), AOneofCase::ABool);
    assert_eq!(second.a_oneof_case(), AOneofCase::AFloat);
    assert_eq!(builder.a_oneof_case(), AOneofCase::AoneofNotSet);
    assert!(!builder.has_required_string());
}

#[test]
fn to_builder_is_independent() {
    let mut builder = TestProtoWithOneOfs::new_builder();
    builder.set_required_string("str").set_double_with_default(1.0);
    let proto = builder.build().unwrap();

    let mut copy = proto.to_builder();
    assert_eq!(copy.a_oneof_case(), AOneofCase::DoubleWithDefault);
    copy.set_a_bool(false);

    assert_eq!(copy.a_oneof_case(), AOneofCase::ABool);
    assert!(copy.has_a_bool());
    assert_eq!(proto.a_oneof_case(), AOneofCase::DoubleWithDefault);
    assert_close(proto.double_with_default(), 1.0);
}
