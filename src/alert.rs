//! Audible alert played when a phase expires.
//!
//! Failures never reach the timer: the caller logs them and carries on.

use std::io::{self, Write};
use thiserror::Error;

use crate::config::AlertConfig;

const BEL: u8 = 0x07;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("Failed to ring terminal bell: {0}")]
    Io(#[from] io::Error),
}

/// Output device for the expiry alert.
pub trait AlertSink: Send {
    /// Start the alert from the beginning.
    fn play(&mut self) -> Result<(), AlertError>;

    /// Silence the alert and rewind it.
    fn stop(&mut self) -> Result<(), AlertError>;
}

/// Rings the terminal bell by writing BEL characters.
pub struct TerminalBell<W: Write + Send> {
    out: W,
    bells: u8,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout(bells: u8) -> Self {
        Self::new(io::stdout(), bells)
    }
}

impl<W: Write + Send> TerminalBell<W> {
    pub fn new(out: W, bells: u8) -> Self {
        Self {
            out,
            bells: bells.max(1),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> AlertSink for TerminalBell<W> {
    fn play(&mut self) -> Result<(), AlertError> {
        let bells = vec![BEL; usize::from(self.bells)];
        self.out.write_all(&bells)?;
        self.out.flush()?;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AlertError> {
        // A bell is over as soon as it is written.
        Ok(())
    }
}

/// Alert used when `alert.enabled = false`.
pub struct SilentAlert;

impl AlertSink for SilentAlert {
    fn play(&mut self) -> Result<(), AlertError> {
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AlertError> {
        Ok(())
    }
}

/// Build the alert described by `config`.
pub fn from_config(config: &AlertConfig) -> Box<dyn AlertSink> {
    if config.enabled {
        Box::new(TerminalBell::stdout(config.bells))
    } else {
        Box::new(SilentAlert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_writes_configured_count() {
        let mut bell = TerminalBell::new(Vec::new(), 3);
        bell.play().unwrap();
        assert_eq!(bell.into_inner(), vec![BEL, BEL, BEL]);
    }

    #[test]
    fn bell_count_is_at_least_one() {
        let mut bell = TerminalBell::new(Vec::new(), 0);
        bell.play().unwrap();
        bell.stop().unwrap();
        assert_eq!(bell.into_inner(), vec![BEL]);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported() {
        let mut bell = TerminalBell::new(BrokenPipe, 1);
        let err = bell.play().unwrap_err();
        assert!(err.to_string().contains("terminal bell"));
    }
}
