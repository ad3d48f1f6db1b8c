use super::*;
use crate::server::{
    error::command::CommandError, model::valor::ValorChange, service::valor::ValorService,
};

/// Tests adding valor to a member with existing valor.
///
/// Expected: Ok with total = initial + amount and reply text
#[tokio::test]
async fn adds_to_existing_valor() {
    let store = store_with(&[(1, 10)]).await;
    let guild = FakeGuild::new(guild_roles());
    let service = ValorService::new(&store, &guild);

    let change = service.add_valor(&admiral(), &member(1), 15).await.unwrap();

    assert_eq!(change.total(), 25);
    assert_eq!(change.to_string(), "Added 15 Valor to Sailor 1. Total: 25");
    assert_eq!(store.get(UserId::new(1)).await, 25);
}

/// Tests that the first award lazily creates the member's entry.
///
/// Expected: Ok with entry created at the awarded amount
#[tokio::test]
async fn creates_entry_on_first_award() {
    let store = PointStore::default();
    let guild = FakeGuild::new(guild_roles());
    let service = ValorService::new(&store, &guild);

    let change = service.add_valor(&admiral(), &member(7), 3).await.unwrap();

    assert_eq!(
        change,
        ValorChange::Added {
            display_name: "Sailor 7".to_string(),
            amount: 3,
            total: 3,
        }
    );
    assert_eq!(store.snapshot().await.len(), 1);
}

/// Tests that zero and negative amounts are rejected.
///
/// Expected: Err(InvalidAmount) with no change to stored valor
#[tokio::test]
async fn rejects_non_positive_amounts() {
    let store = store_with(&[(1, 10)]).await;
    let guild = FakeGuild::new(guild_roles());
    let service = ValorService::new(&store, &guild);

    for amount in [0, -1, -50] {
        let result = service.add_valor(&admiral(), &member(1), amount).await;

        assert_eq!(result, Err(CommandError::InvalidAmount("Valor")));
    }
    assert_eq!(store.get(UserId::new(1)).await, 10);
    assert_eq!(
        CommandError::InvalidAmount("Valor").to_string(),
        "Valor must be > 0."
    );
}

/// Tests that callers without a high-command role are rejected.
///
/// Expected: Err(Unauthorized) and no entry created
#[tokio::test]
async fn rejects_unauthorized_caller() {
    let store = PointStore::default();
    let guild = FakeGuild::new(guild_roles());
    let service = ValorService::new(&store, &guild);

    let result = service.add_valor(&deckhand(), &member(1), 5).await;

    assert_eq!(result, Err(CommandError::Unauthorized));
    assert!(store.snapshot().await.is_empty());
}

/// Tests that a Vice Admiral is also high command.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_vice_admiral() {
    let store = PointStore::default();
    let guild = FakeGuild::new(guild_roles());
    let service = ValorService::new(&store, &guild);
    let actor = Actor::new(
        UserId::new(5),
        vec!["Captain".to_string(), "Vice Admiral".to_string()],
    );

    assert!(service.add_valor(&actor, &member(1), 5).await.is_ok());
}

/// Tests the add-then-promote flow the `addvalor` command runs.
///
/// Store {"1": 10}, award 15: the member clears Able Seaman (5), Leading Seaman (15)
/// and Petty Officer 3rd Class (25) and is granted each in turn.
///
/// Expected: total 25, three grants, each stripping the previous rank, final rank PO3
#[tokio::test]
async fn award_then_promote_walks_every_cleared_rank() {
    let store = store_with(&[(1, 10)]).await;
    let guild = FakeGuild::new(guild_roles());
    let service = ValorService::new(&store, &guild);
    let mut target = member(1);

    service.add_valor(&admiral(), &target, 15).await.unwrap();
    let promotions = service.promote(&mut target).await.unwrap();

    let ranks: Vec<_> = promotions.iter().map(|p| p.rank).collect();
    assert_eq!(
        ranks,
        vec!["Able Seaman", "Leading Seaman", "Petty Officer 3rd Class"]
    );

    let id = UserId::new(1);
    assert_eq!(
        guild.role_calls(),
        vec![
            GuildCall::Add(id, role("Able Seaman")),
            GuildCall::Remove(id, role("Able Seaman")),
            GuildCall::Add(id, role("Leading Seaman")),
            GuildCall::Remove(id, role("Leading Seaman")),
            GuildCall::Add(id, role("Petty Officer 3rd Class")),
        ]
    );
    assert_eq!(
        target.roles,
        [role("Petty Officer 3rd Class")].into_iter().collect()
    );
}
