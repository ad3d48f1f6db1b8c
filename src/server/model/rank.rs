//! Rank tables.
//!
//! Hand-authored tables of the ranks the bot knows about. Threshold ranks are granted
//! automatically once a member's valor clears their threshold; valid ranks are every
//! name the manual `rank` command accepts, including purely honorary ranks.

/// A rank granted automatically at a valor threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankDefinition {
    /// Exact name of the guild role.
    pub name: &'static str,
    /// Minimum valor required.
    pub threshold: u64,
}

impl RankDefinition {
    const fn new(name: &'static str, threshold: u64) -> Self {
        Self { name, threshold }
    }
}

/// Threshold ranks, highest first as authored.
pub const RANK_THRESHOLDS: [RankDefinition; 7] = [
    RankDefinition::new("Chief Warrant Officer", 200),
    RankDefinition::new("Warrant Officer", 140),
    RankDefinition::new("Petty Officer 1st Class", 75),
    RankDefinition::new("Petty Officer 2nd Class", 50),
    RankDefinition::new("Petty Officer 3rd Class", 25),
    RankDefinition::new("Leading Seaman", 15),
    RankDefinition::new("Able Seaman", 5),
];

/// Ranks assignable through the manual override command.
pub const VALID_RANKS: [&str; 20] = [
    "Admiral",
    "Vice Admiral",
    "Rear Admiral",
    "Commodore",
    "Captain",
    "Commander",
    "Lieutenant Commander",
    "Lieutenant",
    "Ensign",
    "Midshipman",
    "Chief Warrant Officer",
    "Petty Officer 1st Class",
    "Petty Officer 2nd Class",
    "Petty Officer 3rd Class",
    "Leading Seaman",
    "Able Seaman",
    "Ordinary Seaman",
    "Warrant Officer",
    "Senior Chief Petty Officer",
    "Chief Petty Officer",
];

/// Role names allowed to mutate valor and assign ranks.
pub const HIGH_COMMAND_ROLES: [&str; 2] = ["Admiral", "Vice Admiral"];

/// Whether a role-name set grants high-command authorization.
pub fn is_high_command<S: AsRef<str>>(role_names: &[S]) -> bool {
    role_names
        .iter()
        .any(|name| HIGH_COMMAND_ROLES.contains(&name.as_ref()))
}

/// Whether a name is accepted by the manual `rank` command.
pub fn is_valid_rank(name: &str) -> bool {
    VALID_RANKS.contains(&name)
}
