//! Coverage of the full error taxonomy: compilation is fail-fast and each
//! malformed input maps to one specific variant.

use sift::{compile, CompileError};

#[test]
fn unexpected_top_level_keyword() {
    let err = compile("Frobnicate 1 2").unwrap_err();
    assert!(matches!(
        err,
        CompileError::UnexpectedKeyword { ref keyword, line: 1 } if keyword == "Frobnicate"
    ));
}

#[test]
fn unexpected_keyword_reports_its_line_number() {
    let err = compile("# fine\n\nNonsense").unwrap_err();
    assert!(matches!(err, CompileError::UnexpectedKeyword { line: 3, .. }));
}

#[test]
fn conflicting_filters_in_one_block() {
    let source = r#"
Show
    BaseType "Ancient Shard"
    Prophecy "The King's Path""#;
    let err = compile(source).unwrap_err();
    assert!(matches!(
        err,
        CompileError::ConflictingFilter { ref first, ref second }
            if first == "BaseType" && second == "Prophecy"
    ));
}

#[test]
fn duplicate_filter_value_on_one_line() {
    let source = r#"
Show
    BaseType "Ancient Shard" "Ancient Shard""#;
    let err = compile(source).unwrap_err();
    assert!(matches!(
        err,
        CompileError::DuplicateFilterValue { ref value, .. } if value == "Ancient Shard"
    ));
}

#[test]
fn duplicate_filter_value_across_lines() {
    let source = r#"
Show
    BaseType "Exalted Orb"
    BaseType "Exalted Orb""#;
    let err = compile(source).unwrap_err();
    assert!(matches!(
        err,
        CompileError::DuplicateFilterValue { ref value, .. } if value == "Exalted Orb"
    ));
}

#[test]
fn use_style_without_a_name() {
    let source = "Show\n    UseStyle";
    let err = compile(source).unwrap_err();
    assert!(matches!(
        err,
        CompileError::MissingStyleName { statement: "UseStyle" }
    ));
}

#[test]
fn define_style_without_a_name() {
    let err = compile("DefineStyle").unwrap_err();
    assert!(matches!(
        err,
        CompileError::MissingStyleName { statement: "DefineStyle" }
    ));
}

#[test]
fn use_of_an_undefined_style() {
    let source = "Show\n    UseStyle Phantom";
    let err = compile(source).unwrap_err();
    assert!(matches!(
        err,
        CompileError::UnknownStyle { ref name } if name == "Phantom"
    ));
}

#[test]
fn style_invoked_with_wrong_parameter_count() {
    let source = r#"
DefineStyle Valuable A B
    MinimapIcon 1 [[A]] [[B]]

Show
    UseStyle Valuable Red"#;
    let err = compile(source).unwrap_err();
    assert!(matches!(
        err,
        CompileError::ArgCountMismatch {
            ref name,
            expected: 2,
            received: 1,
        } if name == "Valuable"
    ));
}

#[test]
fn define_var_with_wrong_arity() {
    assert!(matches!(
        compile("DefineVar OnlyName").unwrap_err(),
        CompileError::BadArity { count: 1 }
    ));
    assert!(matches!(
        compile("DefineVar Name Value Extra").unwrap_err(),
        CompileError::BadArity { count: 3 }
    ));
    assert!(matches!(
        compile("DefineVar").unwrap_err(),
        CompileError::BadArity { count: 0 }
    ));
}

#[test]
fn errors_produce_no_partial_output() {
    // The first block would expand fine, but the document as a whole fails.
    let source = r#"
Show
    BaseType "Ancient Shard"

Garbage"#;
    assert!(compile(source).is_err());
}
