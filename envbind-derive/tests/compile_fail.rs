//! Compile-fail tests to verify error messages
//!
//! These tests ensure that invalid attributes produce clear, pointed error
//! messages instead of silently binding nothing.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
