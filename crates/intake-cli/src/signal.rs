//! Refresh signal — a monotonic counter linking the form to the table.
//!
//! The form's success path bumps the counter; the submissions view
//! remembers the last version it fetched at and re-fetches when it observes
//! a newer one. Readers only care that the value changed, not by how much.

/// Single-writer broadcast counter. Lives on the app struct; mutated only
/// on the UI task, so no synchronisation is needed.
#[derive(Debug, Default)]
pub struct RefreshSignal {
  version: u64,
}

impl RefreshSignal {
  /// Announce that server state changed. Called exactly once per
  /// successful submit.
  pub fn bump(&mut self) {
    self.version += 1;
  }

  pub fn version(&self) -> u64 {
    self.version
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn starts_at_zero_and_increments_monotonically() {
    let mut signal = RefreshSignal::default();
    assert_eq!(signal.version(), 0);
    signal.bump();
    assert_eq!(signal.version(), 1);
    signal.bump();
    signal.bump();
    assert_eq!(signal.version(), 3);
  }
}
