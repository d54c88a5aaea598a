//! capabilities::set
//!
//! Runtime view of the capability traits.
//!
//! # Architecture
//!
//! The traits in [`super::traits`] are the compile-time contract. A
//! [`CapabilitySet`] is the same information as data, for callers that hold
//! a provider behind a type they cannot bound statically and want to check
//! support once before dispatching.
//!
//! Inserting a capability also inserts every capability it extends, so a
//! set containing [`Capability::BranchMerge`] always contains
//! [`Capability::BranchManage`].
//!
//! # Example
//!
//! ```
//! use gitcap::capabilities::{Capability, CapabilitySet};
//!
//! let mut caps = CapabilitySet::new();
//! caps.insert(Capability::BranchMerge);
//!
//! assert!(caps.has(&Capability::BranchMerge));
//! assert!(caps.has(&Capability::BranchManage));
//! assert!(!caps.has(&Capability::Stash));
//!
//! let missing = caps.missing(&[Capability::BranchManage, Capability::Blame]);
//! assert_eq!(missing, vec![Capability::Blame]);
//! ```

use std::collections::HashSet;

use thiserror::Error;

/// A VCS feature area a provider may support.
///
/// One variant per capability trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Checkout, reset, create, delete, rename, current branch.
    BranchManage,
    /// Merging; extends [`Capability::BranchManage`].
    BranchMerge,
    /// Rebasing; extends [`Capability::BranchManage`].
    BranchRebase,
    /// Tagging.
    Tag,
    /// Baseline clone/init/add/commit/push/pull/status/log; extends
    /// [`Capability::BranchManage`] and [`Capability::Tag`].
    VersionControl,
    /// Archiving a tree.
    Archive,
    /// Bisect.
    Bisect,
    /// Blame and file history.
    Blame,
    /// Cherry-pick.
    CherryPick,
    /// Clean and prune.
    Clean,
    /// Diffing.
    Diff,
    /// Reflog.
    Reflog,
    /// Remote management.
    RemoteManage,
    /// Stash.
    Stash,
    /// Submodule management.
    SubmoduleManage,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Capability; 15] = [
        Capability::BranchManage,
        Capability::BranchMerge,
        Capability::BranchRebase,
        Capability::Tag,
        Capability::VersionControl,
        Capability::Archive,
        Capability::Bisect,
        Capability::Blame,
        Capability::CherryPick,
        Capability::Clean,
        Capability::Diff,
        Capability::Reflog,
        Capability::RemoteManage,
        Capability::Stash,
        Capability::SubmoduleManage,
    ];

    /// Capabilities this one extends directly.
    ///
    /// # Example
    ///
    /// ```
    /// use gitcap::capabilities::Capability;
    ///
    /// assert_eq!(Capability::BranchRebase.extends(), &[Capability::BranchManage]);
    /// assert!(Capability::Stash.extends().is_empty());
    /// ```
    pub fn extends(&self) -> &'static [Capability] {
        match self {
            Capability::BranchMerge | Capability::BranchRebase => &[Capability::BranchManage],
            Capability::VersionControl => &[Capability::BranchManage, Capability::Tag],
            _ => &[],
        }
    }

    /// Get a human-readable description of the capability.
    pub fn description(&self) -> &'static str {
        match self {
            Capability::BranchManage => "branch management",
            Capability::BranchMerge => "merging",
            Capability::BranchRebase => "rebasing",
            Capability::Tag => "tagging",
            Capability::VersionControl => "baseline version control",
            Capability::Archive => "archiving",
            Capability::Bisect => "bisect",
            Capability::Blame => "blame and file history",
            Capability::CherryPick => "cherry-pick",
            Capability::Clean => "clean and prune",
            Capability::Diff => "diff",
            Capability::Reflog => "reflog",
            Capability::RemoteManage => "remote management",
            Capability::Stash => "stash",
            Capability::SubmoduleManage => "submodule management",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Raised by [`CapabilitySet::require`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("provider lacks required capabilities: {}", list(.0))]
pub struct MissingCapabilities(pub Vec<Capability>);

fn list(caps: &[Capability]) -> String {
    caps.iter()
        .map(|c| c.description())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The capabilities a provider advertises.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    capabilities: HashSet<Capability>,
}

impl CapabilitySet {
    /// Create an empty capability set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a capability set with the given capabilities and everything
    /// they extend.
    pub fn with<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = Self::new();
        for cap in iter {
            set.insert(cap);
        }
        set
    }

    /// A set holding every capability.
    pub fn all() -> Self {
        Self::with(Capability::ALL)
    }

    /// Insert a capability and the capabilities it extends.
    pub fn insert(&mut self, cap: Capability) {
        if self.capabilities.insert(cap) {
            for parent in cap.extends() {
                self.insert(*parent);
            }
        }
    }

    /// Check if a capability is present.
    pub fn has(&self, cap: &Capability) -> bool {
        self.capabilities.contains(cap)
    }

    /// Check if all given capabilities are present.
    ///
    /// Returns true if the slice is empty.
    pub fn has_all(&self, caps: &[Capability]) -> bool {
        caps.iter().all(|c| self.capabilities.contains(c))
    }

    /// Get the capabilities that are missing from the required set, in the
    /// order they were requested.
    pub fn missing(&self, required: &[Capability]) -> Vec<Capability> {
        required
            .iter()
            .filter(|c| !self.capabilities.contains(c))
            .copied()
            .collect()
    }

    /// Fail with the missing capabilities unless all are present.
    pub fn require(&self, required: &[Capability]) -> Result<(), MissingCapabilities> {
        let missing = self.missing(required);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingCapabilities(missing))
        }
    }

    /// Get the number of capabilities in the set.
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Capabilities in declaration order.
    pub fn sorted(&self) -> Vec<Capability> {
        let mut caps: Vec<_> = self.capabilities.iter().copied().collect();
        caps.sort();
        caps
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<T: IntoIterator<Item = Capability>>(iter: T) -> Self {
        Self::with(iter)
    }
}

/// Implemented by providers to advertise their capability set.
pub trait Capable {
    /// The capabilities this provider supports.
    fn capabilities(&self) -> CapabilitySet;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod capability {
        use super::*;

        #[test]
        fn all_variants_have_descriptions() {
            for cap in Capability::ALL {
                assert!(!cap.description().is_empty());
            }
        }

        #[test]
        fn display_uses_description() {
            let cap = Capability::Blame;
            assert_eq!(format!("{}", cap), cap.description());
        }

        #[test]
        fn merge_and_rebase_extend_branch_manage_only() {
            assert_eq!(Capability::BranchMerge.extends(), &[Capability::BranchManage]);
            assert_eq!(Capability::BranchRebase.extends(), &[Capability::BranchManage]);
        }

        #[test]
        fn orthogonal_groups_extend_nothing() {
            for cap in [
                Capability::Archive,
                Capability::Bisect,
                Capability::Blame,
                Capability::CherryPick,
                Capability::Clean,
                Capability::Diff,
                Capability::Reflog,
                Capability::RemoteManage,
                Capability::Stash,
                Capability::SubmoduleManage,
            ] {
                assert!(cap.extends().is_empty(), "{cap:?} should stand alone");
            }
        }
    }

    mod capability_set {
        use super::*;

        #[test]
        fn new_is_empty() {
            let caps = CapabilitySet::new();
            assert!(caps.is_empty());
            assert_eq!(caps.len(), 0);
        }

        #[test]
        fn insert_pulls_in_extended() {
            let caps = CapabilitySet::with([Capability::VersionControl]);
            assert_eq!(
                caps.sorted(),
                vec![
                    Capability::BranchManage,
                    Capability::Tag,
                    Capability::VersionControl
                ]
            );
        }

        #[test]
        fn insert_deduplicates() {
            let caps = CapabilitySet::with([
                Capability::BranchMerge,
                Capability::BranchRebase,
                Capability::BranchManage,
            ]);
            assert_eq!(caps.len(), 3);
        }

        #[test]
        fn all_has_everything() {
            let caps = CapabilitySet::all();
            assert_eq!(caps.len(), Capability::ALL.len());
            assert!(caps.has_all(&Capability::ALL));
        }

        #[test]
        fn has_all_with_empty_required() {
            assert!(CapabilitySet::new().has_all(&[]));
        }

        #[test]
        fn missing_preserves_order() {
            let caps = CapabilitySet::with([Capability::Diff]);
            let missing = caps.missing(&[Capability::Stash, Capability::Diff, Capability::Blame]);
            assert_eq!(missing, vec![Capability::Stash, Capability::Blame]);
        }

        #[test]
        fn require_reports_missing() {
            let caps = CapabilitySet::with([Capability::Blame]);
            assert!(caps.require(&[Capability::Blame]).is_ok());

            let err = caps
                .require(&[Capability::Blame, Capability::Diff, Capability::Stash])
                .unwrap_err();
            assert_eq!(err.0, vec![Capability::Diff, Capability::Stash]);
            assert_eq!(
                err.to_string(),
                "provider lacks required capabilities: diff, stash"
            );
        }

        #[test]
        fn from_iterator() {
            let caps: CapabilitySet = [Capability::BranchRebase].into_iter().collect();
            assert!(caps.has(&Capability::BranchManage));
        }

        #[test]
        fn equality_ignores_insert_order() {
            let a = CapabilitySet::with([Capability::Stash, Capability::Tag]);
            let b = CapabilitySet::with([Capability::Tag, Capability::Stash]);
            assert_eq!(a, b);
        }
    }
}
