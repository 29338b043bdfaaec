// End to end in memory flow: config, app state, candidate lifecycle with an uploaded file.

use job_board::modules::candidates::core::candidate::Candidate;
use job_board::modules::files::core::file::FileDto;
use job_board::shell::config::Config;
use job_board::shell::state::AppState;
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
async fn before_each() -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    let state = unseeded_state(&dir).await;
    (dir, state)
}

#[rstest]
#[tokio::test]
async fn candidate_lifecycle_follows_the_reference_scenario(
    #[future] before_each: (TempDir, AppState),
) {
    let (_dir, state) = before_each.await;
    let now = chrono::Utc::now();

    let a = state
        .candidates
        .save(Candidate::new("A", "Junior", now, 1), FileDto::new("a.txt", b"a".to_vec()))
        .await
        .unwrap();
    let b = state
        .candidates
        .save(Candidate::new("B", "Middle", now, 2), FileDto::default())
        .await
        .unwrap();
    assert_eq!((a.id, b.id), (1, 2));

    let mut renamed = a.clone();
    renamed.name = "A renamed".into();
    assert!(state.candidates.update(renamed, FileDto::default()).await.unwrap());
    assert_eq!(
        state.candidates.find_by_id(1).await.map(|c| c.name),
        Some("A renamed".to_string())
    );

    assert!(state.candidates.delete_by_id(2).await);
    let all = state.candidates.find_all().await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, 1);
    assert_eq!(all[0].file_id, a.file_id);
}

#[rstest]
#[tokio::test]
async fn deleting_a_candidate_removes_the_file_from_disk(#[future] before_each: (TempDir, AppState)) {
    let (dir, state) = before_each.await;
    let saved = state
        .candidates
        .save(
            Candidate::new("A", "Junior", chrono::Utc::now(), 1),
            FileDto::new("a.txt", b"a".to_vec()),
        )
        .await
        .unwrap();
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);

    assert!(state.candidates.delete_by_id(saved.id).await);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

async fn unseeded_state(dir: &TempDir) -> AppState {
    let config = Config {
        files_dir: dir.path().to_path_buf(),
        seed_fixtures: false,
    };
    AppState::build(&config).await.unwrap()
}

fn files_on_disk(dir: &TempDir) -> usize {
    std::fs::read_dir(dir.path()).unwrap().count()
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_deletes_remove_the_candidate_and_its_file_once() {
    let dir = TempDir::new().unwrap();
    let state = unseeded_state(&dir).await;
    let saved = state
        .candidates
        .save(
            Candidate::new("A", "Junior", chrono::Utc::now(), 1),
            FileDto::new("a.txt", b"a".to_vec()),
        )
        .await
        .unwrap();

    let id = saved.id;
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move { state.candidates.delete_by_id(id).await })
        })
        .collect();
    let mut removed = 0;
    for handle in handles {
        if handle.await.unwrap() {
            removed += 1;
        }
    }

    assert_eq!(removed, 1);
    assert_eq!(state.candidates.find_by_id(id).await, None);
    assert_eq!(files_on_disk(&dir), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn delete_racing_a_file_swap_leaves_no_file_behind() {
    let dir = TempDir::new().unwrap();
    let state = unseeded_state(&dir).await;

    for round in 0..20 {
        let saved = state
            .candidates
            .save(
                Candidate::new(format!("C{round}"), "Junior", chrono::Utc::now(), 1),
                FileDto::new("old.txt", b"old".to_vec()),
            )
            .await
            .unwrap();

        let updater = {
            let state = state.clone();
            let replacement = saved.clone();
            tokio::spawn(async move {
                state
                    .candidates
                    .update(replacement, FileDto::new("new.txt", b"new".to_vec()))
                    .await
            })
        };
        let id = saved.id;
        let deleter = {
            let state = state.clone();
            tokio::spawn(async move { state.candidates.delete_by_id(id).await })
        };

        updater.await.unwrap().unwrap();
        assert!(deleter.await.unwrap());
        assert_eq!(state.candidates.find_by_id(id).await, None);
        assert_eq!(files_on_disk(&dir), 0, "round {round} left a file behind");
    }
}
