//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, Write};

use crate::application::ports::Reporter;
use crate::infrastructure::workflow::command_line;

/// 워크플로 러너 로그 규약을 따르는 콘솔 리포터.
/// info는 그대로, debug/warning/error는 workflow command로 출력한다.
#[derive(Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    fn emit(&self, line: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        self.emit(message);
    }

    fn debug(&self, message: &str) {
        self.emit(&command_line("debug", message));
    }

    fn warning(&self, message: &str) {
        self.emit(&command_line("warning", message));
    }

    fn error(&self, message: &str) {
        self.emit(&command_line("error", message));
    }
}
