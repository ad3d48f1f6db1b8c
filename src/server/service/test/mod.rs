use serenity::all::{RoleId, UserId};

use crate::server::{
    data::PointStore,
    model::member::{Actor, GuildRole, GuildRoles, RankedMember},
};

mod add_valor;
mod auto_promotion;

use fake::{FakeGuild, FakeSink, GuildCall, SlowGuild};

/// Role IDs used by the fake guild, one per name.
const ROLE_NAMES: [&str; 12] = [
    "Admiral",
    "Vice Admiral",
    "Captain",
    "Ordinary Seaman",
    "Able Seaman",
    "Leading Seaman",
    "Petty Officer 3rd Class",
    "Petty Officer 2nd Class",
    "Petty Officer 1st Class",
    "Warrant Officer",
    "Chief Warrant Officer",
    "Quartermaster",
];

/// Guild roles with IDs 1.. in `ROLE_NAMES` order.
fn guild_roles() -> GuildRoles {
    GuildRoles::new(
        ROLE_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| GuildRole {
                id: RoleId::new(i as u64 + 1),
                name: name.to_string(),
            })
            .collect(),
    )
}

/// ID of a role in `guild_roles()`.
fn role(name: &str) -> RoleId {
    let index = ROLE_NAMES
        .iter()
        .position(|n| *n == name)
        .unwrap_or_else(|| panic!("unknown test role {name}"));
    RoleId::new(index as u64 + 1)
}

fn admiral() -> Actor {
    Actor::new(UserId::new(900), vec!["Admiral".to_string()])
}

fn deckhand() -> Actor {
    Actor::new(UserId::new(901), vec!["Able Seaman".to_string()])
}

fn member(id: u64) -> RankedMember {
    RankedMember::new(UserId::new(id), format!("Sailor {id}"))
}

async fn store_with(entries: &[(u64, u64)]) -> PointStore {
    let store = PointStore::default();
    for (id, valor) in entries {
        store.set(UserId::new(*id), *valor).await;
    }
    store
}
