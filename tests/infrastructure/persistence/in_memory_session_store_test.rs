use fluency_coach::application::ports::SessionStore;
use fluency_coach::domain::{PracticeMode, Session, SessionId};
use fluency_coach::infrastructure::persistence::InMemorySessionStore;

#[tokio::test]
async fn given_inserted_session_when_fetched_then_same_session_is_shared() {
    let store = InMemorySessionStore::new();
    let session = Session::new(1000);
    let id = session.id;

    let handle = store.insert(session).await;
    handle.lock().await.select_mode(PracticeMode::Dictation);

    let fetched = store.get(id).await.unwrap();
    assert_eq!(fetched.lock().await.mode, Some(PracticeMode::Dictation));
    assert_eq!(store.count().await, 1);
}

#[tokio::test]
async fn given_unknown_id_when_fetched_then_none() {
    let store = InMemorySessionStore::new();

    assert!(store.get(SessionId::new()).await.is_none());
}

#[tokio::test]
async fn given_session_when_removed_then_gone_and_second_remove_reports_false() {
    let store = InMemorySessionStore::new();
    let session = Session::new(1000);
    let id = session.id;
    store.insert(session).await;

    assert!(store.remove(id).await);
    assert!(!store.remove(id).await);
    assert_eq!(store.count().await, 0);
}
