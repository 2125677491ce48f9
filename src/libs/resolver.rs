//! Fuzzy name matching between hours-file fragments and remote entities.

use crate::api::{Milestone, Project, Ticket};

/// Anything that can be matched by name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Project {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Milestone {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Ticket {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Returns every candidate whose name contains `fragment`, ignoring case,
/// in catalog order. No match is an empty result, not an error.
pub fn resolve<'a, T: Named>(fragment: &str, candidates: &'a [T]) -> Vec<&'a T> {
    let fragment = fragment.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.name().to_lowercase().contains(&fragment))
        .collect()
}
