//! Best-effort renaming of groups through a [`GroupNamer`].

use std::time::Duration;

use tracing::{info, warn};

use huddle_core::Group;

use crate::error::NamingError;
use crate::namer::{GroupNamer, NamingRequest, NamingStyle};

/// Outcome of a decoration attempt.
#[derive(Debug)]
pub enum Decoration {
    /// Names were applied to this many groups.
    Renamed(usize),
    /// The namer failed; every group kept its name.
    Skipped(NamingError),
}

impl Decoration {
    /// Number of groups that got a new name.
    pub fn renamed(&self) -> usize {
        match self {
            Self::Renamed(n) => *n,
            Self::Skipped(_) => 0,
        }
    }
}

/// Apply names to groups by position.
///
/// Extra names are ignored, missing or blank names leave the group's current
/// name in place. Returns how many groups were renamed.
pub fn apply_names(groups: &mut [Group], names: &[String]) -> usize {
    let mut renamed = 0;
    for (group, name) in groups.iter_mut().zip(names) {
        let name = name.trim();
        if !name.is_empty() {
            group.name = name.to_string();
            renamed += 1;
        }
    }
    renamed
}

/// Ask the namer for display names and apply whatever comes back.
///
/// Never fails: errors and timeouts are logged and reported as
/// [`Decoration::Skipped`], leaving all names untouched.
pub async fn decorate<N>(
    groups: &mut [Group],
    namer: &N,
    style: &NamingStyle,
    timeout: Duration,
) -> Decoration
where
    N: GroupNamer + ?Sized,
{
    if groups.is_empty() {
        return Decoration::Renamed(0);
    }

    let request = NamingRequest::new(groups.len(), style);
    let result = match tokio::time::timeout(timeout, namer.suggest_names(&request)).await {
        Ok(result) => result,
        Err(_) => Err(NamingError::TimedOut(timeout)),
    };

    match result {
        Ok(names) => {
            if names.len() != groups.len() {
                warn!(
                    requested = groups.len(),
                    received = names.len(),
                    "naming service returned a different number of names"
                );
            }
            let renamed = apply_names(groups, &names);
            info!(renamed, groups = groups.len(), "groups renamed");
            Decoration::Renamed(renamed)
        }
        Err(e) => {
            warn!(error = %e, "group naming failed, keeping default names");
            Decoration::Skipped(e)
        }
    }
}
