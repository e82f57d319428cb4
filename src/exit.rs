// src/exit.rs
//! Standardized process exit codes for `dotrank`.
//!
//! Provides a stable contract for scripts and automation: 0 on success
//! (including `-h`), 1 on any validation or I/O failure.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DotRankExit {
    /// Operation completed successfully.
    Success = 0,
    /// Validation, ingestion, or I/O failure.
    Error = 1,
}

impl DotRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for DotRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<()>> for DotRankExit {
    fn from(res: anyhow::Result<()>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => {
                eprintln!("Error: {e}");
                Self::Error
            }
        }
    }
}
