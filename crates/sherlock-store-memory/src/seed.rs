use sherlock_core::{Case, NewCase};

/// The two cases every fresh server starts with.
pub fn seed_cases() -> Vec<Case> {
  vec![
    NewCase::new("A Study in Scarlet", "March 1881", "london").with_id(1),
    NewCase::new("A Scandal in Bohemia", "20 March 1888", "london").with_id(2),
  ]
}
