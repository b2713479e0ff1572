//! Test doubles shared by the unit tests

use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::interface::DisplayInterface;

/// One bus transaction seen by [`MockInterface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// Single command byte
    Command(u8),
    /// RAM write, start address first
    Ram(Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Records every transaction; fails once `fail_after` transactions succeeded
#[derive(Debug, Default)]
pub struct MockInterface {
    pub transactions: Vec<Transaction>,
    pub fail_after: Option<usize>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(count: usize) -> Self {
        Self {
            transactions: Vec::new(),
            fail_after: Some(count),
        }
    }

    pub fn commands(&self) -> Vec<u8> {
        self.transactions
            .iter()
            .filter_map(|t| match t {
                Transaction::Command(command) => Some(*command),
                Transaction::Ram(_) => None,
            })
            .collect()
    }

    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.transactions
            .iter()
            .filter_map(|t| match t {
                Transaction::Ram(frame) => Some(frame.clone()),
                Transaction::Command(_) => None,
            })
            .collect()
    }

    pub fn last_command(&self) -> Option<u8> {
        self.commands().last().copied()
    }

    pub fn last_frame(&self) -> Option<Vec<u8>> {
        self.frames().pop()
    }

    fn record(&mut self, transaction: Transaction) -> Result<(), MockError> {
        if self.fail_after == Some(self.transactions.len()) {
            return Err(MockError);
        }
        self.transactions.push(transaction);
        Ok(())
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.record(Transaction::Command(command))
    }

    fn write_ram(&mut self, start: u8, data: &[u8]) -> Result<(), Self::Error> {
        let mut frame = Vec::with_capacity(data.len() + 1);
        frame.push(start);
        frame.extend_from_slice(data);
        self.record(Transaction::Ram(frame))
    }
}

/// Records the length of every millisecond delay
#[derive(Debug, Default)]
pub struct MockDelay {
    pub delays_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}
