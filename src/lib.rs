pub mod case;
pub mod compare;
pub mod error;
pub mod report;
pub mod value;

pub use case::TestCase;
pub use compare::{check_equals, check_identical, classify, Strategy, EPSILON};
pub use error::{AssertResult, AssertionFailed};
pub use report::{Collect, FailKind, JsonLines, Record, Report};
pub use value::Value;
