//! View-state machines for the two analyzer panels.
//!
//! Each panel moves through `idle -> loading -> settled`. A submission is
//! split in two steps so the network call can happen outside the panel:
//! [`SinglePanel::begin`] validates input and returns a [`Submission`] ticket,
//! then [`SinglePanel::settle`] applies the outcome. A ticket that is no longer
//! the latest one for its panel is ignored when it settles, so an older
//! request finishing late cannot overwrite a newer result.

mod batch;
mod single;
#[cfg(test)]
pub(crate) mod testing;

pub use batch::{BatchPanel, BatchSummary};
pub use single::SinglePanel;

/// A validated request waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission<T> {
    generation: u64,
    payload: T,
}

impl<T> Submission<T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// What should be sent to the service.
    pub fn payload(&self) -> &T {
        &self.payload
    }
}

/// Hands out increasing generation numbers, one per submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RequestTracker {
    current: u64,
}

impl RequestTracker {
    pub(crate) fn issue<T>(&mut self, payload: T) -> Submission<T> {
        self.current += 1;
        Submission {
            generation: self.current,
            payload,
        }
    }

    pub(crate) fn is_current<T>(&self, submission: &Submission<T>) -> bool {
        submission.generation == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_submission_is_current() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue("a");
        assert!(tracker.is_current(&first));

        let second = tracker.issue("b");
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
        assert!(second.generation() > first.generation());
    }
}
