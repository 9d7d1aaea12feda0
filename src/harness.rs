// gldispatch/src/harness.rs
//
//! Test-result reporting, and the default dispatch hooks built on it.

use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};
use std::process;

/// The outcome of one test program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail,
    Skip,
    Warn,
}

impl TestResult {
    /// The process exit status the harness reads back.
    pub fn exit_code(self) -> i32 {
        match self {
            TestResult::Pass => 0,
            TestResult::Fail => 1,
            TestResult::Skip => 77,
            TestResult::Warn => 78,
        }
    }

    fn name(self) -> &'static str {
        match self {
            TestResult::Pass => "pass",
            TestResult::Fail => "fail",
            TestResult::Skip => "skip",
            TestResult::Warn => "warn",
        }
    }
}

impl Display for TestResult {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Prints the result line and ends the process with the result's exit status.
pub fn report_result(result: TestResult) -> ! {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let _ = writeln!(stdout, "RESULT: {{\"result\": \"{}\"}}", result);
    let _ = stdout.flush();
    process::exit(result.exit_code())
}

/// The default `on_unsupported` hook: the context doesn't offer `name`, so the test is
/// skipped.
pub fn skip_unsupported(name: &str) -> ! {
    warn!("Function \"{}\" not supported on this implementation", name);
    report_result(TestResult::Skip)
}

/// The default `on_resolution_failure` hook: the context claims to offer `name` but the
/// platform couldn't produce it, which is a driver or loader bug.
pub fn fail_unresolved(name: &str) -> ! {
    error!("failed to get address of function \"{}\"", name);
    report_result(TestResult::Fail)
}
