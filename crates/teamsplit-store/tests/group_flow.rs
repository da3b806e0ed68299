//! Integration tests for the group directory.
//!
//! These exercise the application layer end-to-end over the in-memory
//! storage adapter: `GroupDirectory` + `PlayerRoster` + `MemoryStore`.

use std::sync::Arc;

use teamsplit_core::{Player, Team};
use teamsplit_store::application::group_directory::GroupDirectory;
use teamsplit_store::application::player_roster::PlayerRoster;
use teamsplit_store::application::AppError;
use teamsplit_store::infrastructure::storage::memory::MemoryStore;
use teamsplit_store::infrastructure::storage::{KeyValueStore, StorageContext, StorageKeys};

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .ok();
}

fn setup() -> (GroupDirectory, PlayerRoster, Arc<MemoryStore>) {
    init_logging();
    let store = Arc::new(MemoryStore::new());
    let ctx = StorageContext::new(
        Arc::clone(&store) as Arc<dyn KeyValueStore>,
        StorageKeys::default(),
    );
    (GroupDirectory::new(ctx.clone()), PlayerRoster::new(ctx), store)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_created_groups_list_in_insertion_order_without_duplicates() {
    let (directory, _, _) = setup();

    directory.create_group("friday").await.unwrap();
    directory.create_group("monday").await.unwrap();
    directory.create_group("alumni").await.unwrap();

    let groups = directory.list_groups().await.unwrap();
    assert_eq!(groups, ["friday", "monday", "alumni"]);
}

#[tokio::test]
async fn test_duplicate_group_is_rejected_and_list_is_unchanged() {
    let (directory, _, store) = setup();

    directory.create_group("friday").await.unwrap();
    let err = directory.create_group("friday").await.unwrap_err();

    assert!(matches!(err, AppError::DuplicateGroup { .. }));
    assert_eq!(
        err.user_message().as_deref(),
        Some("a group with this name already exists")
    );

    // The stored list still has exactly one entry
    let groups = directory.list_groups().await.unwrap();
    assert_eq!(groups, ["friday"]);
    let raw = store.raw(StorageKeys::default().groups()).await.unwrap();
    assert_eq!(raw, r#"["friday"]"#);
}

#[tokio::test]
async fn test_remove_group_cascades_to_its_players() {
    let (directory, roster, store) = setup();

    directory.create_group("friday").await.unwrap();
    roster
        .add_player(Player::new("Ana", Team::A), "friday")
        .await
        .unwrap();
    roster
        .add_player(Player::new("Bruno", Team::B), "friday")
        .await
        .unwrap();

    directory.remove_group("friday").await.unwrap();

    assert!(roster.list_players("friday").await.unwrap().is_empty());
    assert!(!directory.group_exists("friday").await.unwrap());

    // The roster key itself is gone, not just empty
    let roster_key = StorageKeys::default().roster("friday");
    assert_eq!(store.raw(&roster_key).await, None);
}

#[tokio::test]
async fn test_remove_missing_group_is_a_noop() {
    let (directory, _, _) = setup();

    directory.create_group("friday").await.unwrap();
    directory.remove_group("nonexistent").await.unwrap();

    let groups = directory.list_groups().await.unwrap();
    assert_eq!(groups, ["friday"]);
}

#[tokio::test]
async fn test_group_exists_tracks_creation_and_removal() {
    let (directory, _, _) = setup();

    assert!(!directory.group_exists("friday").await.unwrap());

    directory.create_group("friday").await.unwrap();
    assert!(directory.group_exists("friday").await.unwrap());

    directory.remove_group("friday").await.unwrap();
    assert!(!directory.group_exists("friday").await.unwrap());
}

#[tokio::test]
async fn test_persisted_group_list_is_a_json_string_array() {
    // The persisted layout must stay exactly as the original app wrote it.
    let (directory, _, store) = setup();

    directory.create_group("friday").await.unwrap();
    directory.create_group("monday").await.unwrap();

    let raw = store.raw(StorageKeys::default().groups()).await.unwrap();
    assert_eq!(raw, r#"["friday","monday"]"#);
}

#[tokio::test]
async fn test_removing_one_group_leaves_other_rosters_alone() {
    let (directory, roster, _) = setup();

    directory.create_group("friday").await.unwrap();
    directory.create_group("monday").await.unwrap();
    roster
        .add_player(Player::new("Ana", Team::A), "friday")
        .await
        .unwrap();
    roster
        .add_player(Player::new("Bruno", Team::A), "monday")
        .await
        .unwrap();

    directory.remove_group("friday").await.unwrap();

    let monday = roster.list_players("monday").await.unwrap();
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].name, "Bruno");
}
