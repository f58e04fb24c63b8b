use crate::config::ConfigError;
use crate::probe::{ProbeError, Verdict};

pub const EXIT_OK: i32 = 0;
pub const EXIT_CONNECT: i32 = 1;
pub const EXIT_RECEIVE: i32 = 2;
pub const EXIT_RESPONSE: i32 = 3;
pub const EXIT_CONFIG: i32 = 4;

/// The terminal verdict of one invocation: an exit code plus the single
/// line reported to the caller. Success goes to stdout with an "OK: "
/// prefix, everything else to stderr with an "ERROR: " prefix.
#[derive(Debug, PartialEq, Eq)]
pub enum Report {
    Ok(String),
    Error { code: i32, message: String },
}

impl Report {
    pub fn from_probe(result: Result<Verdict, ProbeError>) -> Self {
        match result {
            Ok(Verdict::Responsive(payload)) => {
                Report::Ok(payload.escape_ascii().to_string())
            }
            Ok(Verdict::Empty) => Report::Error {
                code: EXIT_RESPONSE,
                message: "No response".to_string(),
            },
            Ok(Verdict::Short(_)) => Report::Error {
                code: EXIT_RESPONSE,
                message: "Short response.".to_string(),
            },
            Err(err) => {
                let code = match err {
                    ProbeError::ConnectTimedOut | ProbeError::Connect(_) => EXIT_CONNECT,
                    ProbeError::ReceiveTimedOut | ProbeError::Receive(_) => EXIT_RECEIVE,
                };
                Report::Error {
                    code,
                    message: err.to_string(),
                }
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Report::Ok(_) => EXIT_OK,
            Report::Error { code, .. } => *code,
        }
    }

    /// The one line printed for this invocation, prefix included.
    pub fn line(&self) -> String {
        match self {
            Report::Ok(message) => format!("OK: {message}"),
            Report::Error { message, .. } => format!("ERROR: {message}"),
        }
    }
}

impl From<ConfigError> for Report {
    fn from(err: ConfigError) -> Self {
        Report::Error {
            code: EXIT_CONFIG,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn responsive_reply_reports_ok_on_stdout() {
        let payload = b"\xFF\xFF\xFF\xFFIsome server".to_vec();
        let report = Report::from_probe(Ok(Verdict::Responsive(payload)));
        assert_eq!(report.exit_code(), EXIT_OK);
        assert_eq!(report.line(), r"OK: \xff\xff\xff\xffIsome server");
    }

    #[test]
    fn empty_and_short_replies_share_exit_code_three() {
        let empty = Report::from_probe(Ok(Verdict::Empty));
        assert_eq!(empty.exit_code(), EXIT_RESPONSE);
        assert_eq!(empty.line(), "ERROR: No response");

        let short = Report::from_probe(Ok(Verdict::Short(4)));
        assert_eq!(short.exit_code(), EXIT_RESPONSE);
        assert_eq!(short.line(), "ERROR: Short response.");
    }

    #[test]
    fn connect_failures_report_exit_code_one() {
        let timed_out = Report::from_probe(Err(ProbeError::ConnectTimedOut));
        assert_eq!(timed_out.exit_code(), EXIT_CONNECT);
        assert_eq!(timed_out.line(), "ERROR: Request timed out");

        let refused = Report::from_probe(Err(ProbeError::Connect(io::Error::from(
            io::ErrorKind::ConnectionRefused,
        ))));
        assert_eq!(refused.exit_code(), EXIT_CONNECT);
        assert_eq!(refused.line(), "ERROR: Unable to connect");
    }

    #[test]
    fn receive_failures_report_exit_code_two() {
        for err in [
            ProbeError::ReceiveTimedOut,
            ProbeError::Receive(io::Error::from(io::ErrorKind::ConnectionReset)),
        ] {
            let report = Report::from_probe(Err(err));
            assert_eq!(report.exit_code(), EXIT_RECEIVE);
            assert_eq!(report.line(), "ERROR: Unable to receive");
        }
    }

    #[test]
    fn config_errors_report_exit_code_four() {
        let report = Report::from(ConfigError::MissingAddress);
        assert_eq!(report.exit_code(), EXIT_CONFIG);
        assert_eq!(report.line(), "ERROR: No IPv4 address supplied.");

        let report = Report::from(ConfigError::MissingPort);
        assert_eq!(report.exit_code(), EXIT_CONFIG);
        assert_eq!(report.line(), "ERROR: No port supplied.");
    }
}
