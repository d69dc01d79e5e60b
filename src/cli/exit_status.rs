use std::process::ExitCode;

/// How a trsheet invocation ended.
///
/// - `Success` (0): the action completed and produced its output
/// - `Failure` (1): the action completed but had nothing to produce
/// - `Error` (2): the action was aborted (parse error, I/O error, malformed spreadsheet)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
