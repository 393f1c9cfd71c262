use super::*;

#[test]
fn load_requires_access_token() {
    let store = MemoryStore::new();
    store.set(REFRESH_TOKEN_KEY, "r1");
    assert_eq!(Session::load(&store), None);

    store.set(ACCESS_TOKEN_KEY, "");
    assert_eq!(Session::load(&store), None);
}

#[test]
fn save_then_load_keeps_all_fields() {
    let store = MemoryStore::new();
    let session = Session {
        access_token: "a1".to_owned(),
        refresh_token: Some("r1".to_owned()),
        username: Some("ana".to_owned()),
    };
    session.save(&store);
    assert_eq!(Session::load(&store), Some(session));
    assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("a1"));
}

#[test]
fn clear_drops_everything() {
    let store = MemoryStore::new();
    store.set(ACCESS_TOKEN_KEY, "a1");
    store.set(USERNAME_KEY, "ana");
    store.clear();
    assert!(store.is_empty());
}

#[test]
fn store_reference_forwards_calls() {
    let store = MemoryStore::new();
    let by_ref: &MemoryStore = &store;
    SessionStore::set(&by_ref, USERNAME_KEY, "ana");
    assert_eq!(store.get(USERNAME_KEY).as_deref(), Some("ana"));
}
