/// Record numbers for body lines, in write order.
///
/// Line 1 is the header, so the first body line is numbered 2.
#[derive(Debug, Clone)]
pub struct Sequencer {
    next: u64,
}

pub const FIRST_BODY_RECORD_NUMBER: u64 = 2;

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            next: FIRST_BODY_RECORD_NUMBER,
        }
    }

    pub fn next_number(&mut self) -> u64 {
        let current = self.next;
        self.next += 1;
        current
    }

    /// How many numbers have been handed out.
    pub fn issued(&self) -> u64 {
        self.next - FIRST_BODY_RECORD_NUMBER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_start_after_header_without_gaps() {
        let mut sequencer = Sequencer::new();
        let issued: Vec<u64> = (0..4).map(|_| sequencer.next_number()).collect();
        assert_eq!(issued, vec![2, 3, 4, 5]);
        assert_eq!(sequencer.issued(), 4);
    }
}
