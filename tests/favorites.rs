mod common;

use common::{runtime, FakeSource};
use lumina::source::PhotoSource;
use lumina::storage::{load_favorites, FavoritesStore, JsonFavoritesStore};
use lumina::ui::HeaderInfo;
use lumina::{initialize_with_source, Config, Event, PhotoId, ViewMode};
use std::collections::BTreeSet;
use std::sync::Arc;
use tempfile::TempDir;

fn ids(raw: &[u64]) -> BTreeSet<PhotoId> {
    raw.iter().copied().map(PhotoId).collect()
}

fn config_in(dir: &TempDir) -> Config {
    Config {
        data_dir: dir.path().join("data"),
        download_dir: dir.path().join("downloads"),
        ..Config::default()
    }
}

#[test]
fn slot_round_trips_across_sessions() {
    let dir = TempDir::new().unwrap();

    let mut first = JsonFavoritesStore::in_dir(dir.path()).unwrap();
    first.save(&ids(&[3, 17, 42])).unwrap();

    let second = JsonFavoritesStore::in_dir(dir.path()).unwrap();
    assert_eq!(second.load().unwrap(), ids(&[3, 17, 42]));
}

#[test]
fn malformed_slot_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFavoritesStore::in_dir(dir.path()).unwrap();
    std::fs::write(store.path(), "{ not json").unwrap();

    assert!(store.load().is_err());
    assert!(load_favorites(&store).is_empty());
}

#[tokio::test]
async fn toggles_persist_through_a_fresh_session() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let source = FakeSource::new();

    {
        let (mut state, mut rt) =
            initialize_with_source(&config, Arc::clone(&source) as Arc<dyn PhotoSource>);
        for id in [3, 17, 42, 99] {
            rt.dispatch(&mut state, Event::ToggleFavorite(PhotoId(id))).unwrap();
        }
        rt.dispatch(&mut state, Event::ToggleFavorite(PhotoId(99))).unwrap();
        assert_eq!(state.favorites, ids(&[3, 17, 42]));
    }

    let (state, _rt) = initialize_with_source(&config, source as Arc<dyn PhotoSource>);
    assert_eq!(state.favorites, ids(&[3, 17, 42]));
}

#[tokio::test]
async fn double_toggle_restores_membership() {
    let dir = TempDir::new().unwrap();
    let source = FakeSource::new();
    let (mut state, mut rt, store) = runtime(&source, dir.path());

    rt.dispatch(&mut state, Event::ToggleFavorite(PhotoId(7))).unwrap();
    assert!(state.is_favorite(PhotoId(7)));
    rt.dispatch(&mut state, Event::ToggleFavorite(PhotoId(7))).unwrap();
    assert!(!state.is_favorite(PhotoId(7)));

    assert_eq!(store.write_count(), 2);
    assert_eq!(store.snapshot(), Some(BTreeSet::new()));
}

#[tokio::test]
async fn favorites_view_lists_loaded_favorites() {
    let dir = TempDir::new().unwrap();
    let source = FakeSource::new();
    let (mut state, mut rt, _) = runtime(&source, dir.path());

    rt.dispatch(&mut state, Event::Init).unwrap();
    rt.settle(&mut state).await.unwrap();
    for id in [101, 110, 5000] {
        rt.dispatch(&mut state, Event::ToggleFavorite(PhotoId(id))).unwrap();
    }
    rt.dispatch(&mut state, Event::ShowFavorites(true)).unwrap();
    assert_eq!(state.view_mode, ViewMode::Favorites);

    let vm = state.compute_viewmodel();
    let HeaderInfo { title, subtitle } = &vm.header;
    assert_eq!(title, "My Favorites (3)");
    assert!(subtitle.is_none());
    let shown: Vec<PhotoId> = vm.items.iter().map(|item| item.id).collect();
    assert_eq!(shown, vec![PhotoId(101), PhotoId(110)]);
    assert!(vm.items.iter().all(|item| item.is_favorite));

    rt.dispatch(&mut state, Event::ShowFavorites(false)).unwrap();
    assert_eq!(state.compute_viewmodel().items.len(), 24);
}
