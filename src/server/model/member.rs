//! Guild member and role views used by the rank and valor services.
//!
//! These are platform-neutral snapshots built from Serenity objects at the bot
//! boundary, so the services can be exercised without a Discord connection.

use serenity::all::{Member, Role, RoleId, UserId};
use std::collections::HashSet;

/// A guild member as seen by a command.
///
/// `roles` is kept up to date locally as the services add and remove roles, so a
/// single promotion pass observes its own earlier changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMember {
    pub id: UserId,
    pub display_name: String,
    pub roles: HashSet<RoleId>,
}

impl RankedMember {
    pub fn new(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            roles: HashSet::new(),
        }
    }

    /// Builder-style helper adding held roles.
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = RoleId>) -> Self {
        self.roles.extend(roles);
        self
    }

    pub fn has_role(&self, role: RoleId) -> bool {
        self.roles.contains(&role)
    }
}

impl From<&Member> for RankedMember {
    fn from(member: &Member) -> Self {
        Self {
            id: member.user.id,
            display_name: member.display_name().to_string(),
            roles: member.roles.iter().copied().collect(),
        }
    }
}

/// The member invoking a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    /// Names of the roles the caller holds.
    pub role_names: Vec<String>,
}

impl Actor {
    pub fn new(id: UserId, role_names: Vec<String>) -> Self {
        Self { id, role_names }
    }
}

/// A named guild role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRole {
    pub id: RoleId,
    pub name: String,
}

impl From<&Role> for GuildRole {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
        }
    }
}

/// Snapshot of a guild's roles, looked up by exact name.
///
/// Built from Serenity roles in hierarchy order, lowest position first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildRoles {
    roles: Vec<GuildRole>,
}

impl GuildRoles {
    pub fn new(roles: Vec<GuildRole>) -> Self {
        Self { roles }
    }

    /// Finds a role by exact name.
    ///
    /// When several roles share a name the first one wins, which for a snapshot built
    /// from Serenity roles is the lowest in the hierarchy.
    pub fn find(&self, name: &str) -> Option<RoleId> {
        self.roles.iter().find(|r| r.name == name).map(|r| r.id)
    }

    /// Names of the given role IDs, skipping IDs not in the snapshot.
    pub fn names_of<'a>(&'a self, ids: impl IntoIterator<Item = &'a RoleId>) -> Vec<&'a str> {
        ids.into_iter()
            .filter_map(|id| self.roles.iter().find(|r| r.id == *id))
            .map(|r| r.name.as_str())
            .collect()
    }
}

impl<'a> FromIterator<&'a Role> for GuildRoles {
    fn from_iter<I: IntoIterator<Item = &'a Role>>(iter: I) -> Self {
        // Discord hands roles over keyed by ID; position (then ID) gives a stable order
        let mut roles: Vec<&Role> = iter.into_iter().collect();
        roles.sort_by_key(|role| (role.position, role.id));
        Self::new(roles.into_iter().map(GuildRole::from).collect())
    }
}

/// Whether a promotion direct message reached the member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationOutcome {
    Delivered,
    /// The member could not be messaged, e.g. DMs are closed.
    Undelivered,
}

/// A role granted by the automatic promotion pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    pub rank: &'static str,
    pub role: RoleId,
    /// Roles stripped before the grant.
    pub stripped: Vec<RoleId>,
    pub notification: NotificationOutcome,
}
