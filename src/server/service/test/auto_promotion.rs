use super::*;
use crate::server::{
    model::{member::NotificationOutcome, rank::RANK_THRESHOLDS},
    service::rank::{promotion_message, RankService},
};

#[test]
fn threshold_ranks_sort_ascending() {
    let ranks = RankService::<FakeGuild>::threshold_ranks_ascending();

    let thresholds: Vec<_> = ranks.iter().map(|r| r.threshold).collect();
    assert_eq!(thresholds, vec![5, 15, 25, 50, 75, 140, 200]);
    assert_eq!(ranks.len(), RANK_THRESHOLDS.len());
    assert_eq!(ranks[0].name, "Able Seaman");
}

/// Tests that a member below every threshold is not promoted.
///
/// Expected: Ok with no promotions and no calls
#[tokio::test]
async fn no_promotion_below_first_threshold() {
    let guild = FakeGuild::new(guild_roles());
    let mut target = member(1);

    let promotions = RankService::new(&guild)
        .apply_auto_promotion(&guild_roles(), &mut target, 4)
        .await
        .unwrap();

    assert!(promotions.is_empty());
    assert!(guild.calls().is_empty());
}

/// Tests promotion across a single threshold with a direct message.
///
/// Expected: previous rank stripped, new rank granted, DM delivered
#[tokio::test]
async fn promotes_and_notifies() {
    let guild = FakeGuild::new(guild_roles());
    let mut target = member(1).with_roles([role("Able Seaman"), role("Captain")]);

    let promotions = RankService::new(&guild)
        .apply_auto_promotion(&guild_roles(), &mut target, 15)
        .await
        .unwrap();

    assert_eq!(promotions.len(), 1);
    assert_eq!(promotions[0].rank, "Leading Seaman");
    assert_eq!(promotions[0].stripped, vec![role("Able Seaman")]);
    assert_eq!(promotions[0].notification, NotificationOutcome::Delivered);

    let id = UserId::new(1);
    assert_eq!(
        guild.calls(),
        vec![
            GuildCall::Remove(id, role("Able Seaman")),
            GuildCall::Add(id, role("Leading Seaman")),
            GuildCall::Dm(id, promotion_message("Leading Seaman", 15)),
        ]
    );
    // Non-rank roles are left alone.
    assert!(target.has_role(role("Captain")));
}

/// Tests that a member already holding the top qualifying rank is left alone.
///
/// Lower ranks the member clears but does not hold are still granted in turn, which
/// strips the held rank; the final grant restores it.
///
/// Expected: final rank set is the highest cleared rank
#[tokio::test]
async fn regrants_through_lower_ranks_when_holding_highest() {
    let guild = FakeGuild::new(guild_roles());
    let mut target = member(1).with_roles([role("Leading Seaman")]);

    let promotions = RankService::new(&guild)
        .apply_auto_promotion(&guild_roles(), &mut target, 20)
        .await
        .unwrap();

    let ranks: Vec<_> = promotions.iter().map(|p| p.rank).collect();
    assert_eq!(ranks, vec!["Able Seaman", "Leading Seaman"]);
    assert_eq!(target.roles, [role("Leading Seaman")].into_iter().collect());
}

/// Tests that a member already holding exactly the rank they qualify for is untouched.
///
/// Expected: Ok with no calls
#[tokio::test]
async fn keeps_held_rank() {
    let guild = FakeGuild::new(guild_roles());
    let mut target = member(1).with_roles([role("Able Seaman")]);

    let promotions = RankService::new(&guild)
        .apply_auto_promotion(&guild_roles(), &mut target, 9)
        .await
        .unwrap();

    assert!(promotions.is_empty());
    assert!(guild.calls().is_empty());
}

/// Tests that a closed DM channel does not fail the promotion.
///
/// Expected: Ok with the role granted and notification Undelivered
#[tokio::test]
async fn swallows_notification_failure() {
    let guild = FakeGuild::new(guild_roles()).with_closed_dms(1);
    let mut target = member(1);

    let promotions = RankService::new(&guild)
        .apply_auto_promotion(&guild_roles(), &mut target, 5)
        .await
        .unwrap();

    assert_eq!(promotions.len(), 1);
    assert_eq!(promotions[0].notification, NotificationOutcome::Undelivered);
    assert!(target.has_role(role("Able Seaman")));
}

/// Tests that ranks with no matching server role are skipped.
///
/// Expected: only ranks whose role exists are granted
#[tokio::test]
async fn skips_ranks_missing_on_server() {
    let roles = GuildRoles::new(vec![GuildRole {
        id: RoleId::new(50),
        name: "Leading Seaman".to_string(),
    }]);
    let guild = FakeGuild::new(roles.clone());
    let mut target = member(1);

    let promotions = RankService::new(&guild)
        .apply_auto_promotion(&roles, &mut target, 300)
        .await
        .unwrap();

    assert_eq!(promotions.len(), 1);
    assert_eq!(promotions[0].role, RoleId::new(50));
}

/// Tests that the top threshold walks the full table.
///
/// Expected: seven grants ending on Chief Warrant Officer, one rank role held
#[tokio::test]
async fn top_threshold_ends_on_highest_rank() {
    let guild = FakeGuild::new(guild_roles());
    let mut target = member(1);

    let promotions = RankService::new(&guild)
        .apply_auto_promotion(&guild_roles(), &mut target, 200)
        .await
        .unwrap();

    assert_eq!(promotions.len(), 7);
    assert_eq!(promotions[6].rank, "Chief Warrant Officer");
    assert_eq!(
        target.roles,
        [role("Chief Warrant Officer")].into_iter().collect()
    );
}

/// Tests that a failing role change surfaces as an error.
///
/// Expected: Err and no promotions recorded
#[tokio::test]
async fn role_change_failure_is_an_error() {
    let guild = FakeGuild::new(guild_roles()).with_failing_role_changes();
    let mut target = member(1);

    let result = RankService::new(&guild)
        .apply_auto_promotion(&guild_roles(), &mut target, 5)
        .await;

    assert!(result.is_err());
    assert!(target.roles.is_empty());
}
