use std::io;

use crate::compare::{check_equals, check_identical};
use crate::error::{AssertResult, AssertionFailed};
use crate::report::{FailKind, JsonLines, Record, Report};
use crate::value::Value;

/// Evaluates assertions and reports one record per call.
///
/// Each `assert_*` method emits a record and returns `Ok(())` on pass, or
/// emits the failure record and returns `Err(AssertionFailed)` so the
/// runner can abort the current test case. The bare methods delegate to
/// the `*_with_line` forms with line 0; an instrumentation step is
/// expected to rewrite calls into the line-carrying forms, the engine
/// itself never inspects call sites.
pub struct TestCase<R: Report> {
    report: R,
}

impl TestCase<JsonLines<io::Stdout>> {
    /// A test case reporting JSON lines on stdout.
    pub fn new() -> Self {
        TestCase {
            report: JsonLines::stdout(),
        }
    }
}

impl Default for TestCase<JsonLines<io::Stdout>> {
    fn default() -> Self {
        TestCase::new()
    }
}

impl<R: Report> TestCase<R> {
    pub fn with_report(report: R) -> Self {
        TestCase { report }
    }

    pub fn into_report(self) -> R {
        self.report
    }

    pub fn assert_true(&mut self, condition: impl Into<Value>, message: &str) -> AssertResult {
        self.assert_true_with_line(0, condition, message)
    }

    /// Strict check: only `Bool(true)` passes, truthiness does not count.
    pub fn assert_true_with_line(
        &mut self,
        line: u32,
        condition: impl Into<Value>,
        message: &str,
    ) -> AssertResult {
        let condition = condition.into();
        if condition == Value::Bool(true) {
            self.ok()
        } else {
            self.fail(FailKind::Bool, Value::from("true"), condition, message, line)
        }
    }

    pub fn assert_false(&mut self, condition: impl Into<Value>, message: &str) -> AssertResult {
        self.assert_false_with_line(0, condition, message)
    }

    /// Strict check: only `Bool(false)` passes.
    pub fn assert_false_with_line(
        &mut self,
        line: u32,
        condition: impl Into<Value>,
        message: &str,
    ) -> AssertResult {
        let condition = condition.into();
        if condition == Value::Bool(false) {
            self.ok()
        } else {
            self.fail(
                FailKind::Bool,
                Value::from("false"),
                condition,
                message,
                line,
            )
        }
    }

    pub fn assert_same(
        &mut self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        message: &str,
    ) -> AssertResult {
        self.assert_same_with_line(0, expected, actual, message)
    }

    pub fn assert_same_with_line(
        &mut self,
        line: u32,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        message: &str,
    ) -> AssertResult {
        let expected = expected.into();
        let actual = actual.into();
        if check_identical(&expected, &actual) {
            self.ok()
        } else {
            self.fail(FailKind::Same, expected, actual, message, line)
        }
    }

    pub fn assert_not_same(
        &mut self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        message: &str,
    ) -> AssertResult {
        self.assert_not_same_with_line(0, expected, actual, message)
    }

    pub fn assert_not_same_with_line(
        &mut self,
        line: u32,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        message: &str,
    ) -> AssertResult {
        let expected = expected.into();
        let actual = actual.into();
        if !check_identical(&expected, &actual) {
            self.ok()
        } else {
            self.fail(FailKind::NotSame, expected, actual, message, line)
        }
    }

    pub fn assert_equals(
        &mut self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        message: &str,
    ) -> AssertResult {
        self.assert_equals_with_line(0, expected, actual, message)
    }

    pub fn assert_equals_with_line(
        &mut self,
        line: u32,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        message: &str,
    ) -> AssertResult {
        let expected = expected.into();
        let actual = actual.into();
        if check_equals(&expected, &actual) {
            self.ok()
        } else {
            self.fail(FailKind::Equals, expected, actual, message, line)
        }
    }

    pub fn assert_not_equals(
        &mut self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        message: &str,
    ) -> AssertResult {
        self.assert_not_equals_with_line(0, expected, actual, message)
    }

    pub fn assert_not_equals_with_line(
        &mut self,
        line: u32,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        message: &str,
    ) -> AssertResult {
        let expected = expected.into();
        let actual = actual.into();
        if !check_equals(&expected, &actual) {
            self.ok()
        } else {
            self.fail(FailKind::NotEquals, expected, actual, message, line)
        }
    }

    fn ok(&mut self) -> AssertResult {
        self.report.record(Record::Ok);
        Ok(())
    }

    fn fail(
        &mut self,
        kind: FailKind,
        expected: Value,
        actual: Value,
        message: &str,
        line: u32,
    ) -> AssertResult {
        self.report.record(Record::Failed {
            kind,
            expected,
            actual,
            message: message.to_string(),
            line,
        });
        Err(AssertionFailed)
    }
}
