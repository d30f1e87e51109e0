use std::fs;

use bank::{
    Collection, FileStorage, MemoryStorage, NewForumPost, NewTransaction, RecordStore, Storage,
    TransactionKind,
};

fn transaction(amount: f64) -> NewTransaction {
    NewTransaction {
        amount,
        date: "2025-02-14".parse().ok(),
        category: "misc".to_string(),
        note: None,
    }
}

fn snapshot<S: Storage>(store: &RecordStore<S>) -> Vec<Option<String>> {
    Collection::ALL
        .iter()
        .map(|collection| store.raw(*collection))
        .collect()
}

#[test]
fn latest_append_is_always_first() {
    let mut store = RecordStore::new(MemoryStorage::new());

    for (i, amount) in [5.0, 1.0, 9.0, 3.0].into_iter().enumerate() {
        let income = store
            .add_transaction(TransactionKind::Income, transaction(amount))
            .unwrap();
        let expense = store
            .add_transaction(TransactionKind::Expense, transaction(amount * 2.0))
            .unwrap();
        let post = store
            .add_forum_post(NewForumPost {
                author: format!("user{i}"),
                content: "hello".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(store.incomes()[0], income);
        assert_eq!(store.expenses()[0], expense);
        assert_eq!(store.forum_posts()[0], post);
    }

    assert_eq!(store.incomes().len(), 4);
}

#[test]
fn seeding_twice_is_byte_identical() {
    let mut store = RecordStore::open(MemoryStorage::new()).unwrap();
    let first = snapshot(&store);

    store.seed().unwrap();

    assert_eq!(first, snapshot(&store));
    assert!(first.iter().all(Option::is_some));
}

#[test]
fn ids_unique_within_collection() {
    let mut store = RecordStore::open(MemoryStorage::new()).unwrap();

    for _ in 0..50 {
        store
            .add_transaction(TransactionKind::Expense, transaction(1.0))
            .unwrap();
    }

    let mut ids: Vec<u64> = store.expenses().iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 52);
}

#[test]
fn file_store_keeps_records_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("finance.json");

    let mut store = RecordStore::open(FileStorage::open(&path).unwrap()).unwrap();
    let goal_id = store.goals()[0].id;
    store.update_goal_progress(goal_id, 2500.0).unwrap();
    store
        .add_transaction(TransactionKind::Income, transaction(750.0))
        .unwrap();
    drop(store);

    let reopened = RecordStore::open(FileStorage::open(&path).unwrap()).unwrap();
    assert_eq!(reopened.incomes().len(), 3);
    assert_eq!(reopened.incomes()[0].amount, 750.0);
    assert_eq!(reopened.goal(goal_id).unwrap().current, 32500.0);
}

#[test]
fn reads_values_written_by_the_browser_build() {
    let mut storage = MemoryStorage::new();
    storage
        .set(
            "forumPosts",
            r#"[{"id":1741340000000,"author":"Meera","content":"Hi","date":"2025-03-07","likes":0,"comments":[]}]"#
                .to_string(),
        )
        .unwrap();
    storage
        .set(
            "vault",
            r#"[{"id":1741340000001,"title":"Mail","credential":"GA==","createdAt":"2025-03-07T10:13:20.000Z"}]"#
                .to_string(),
        )
        .unwrap();

    let store = RecordStore::open(storage).unwrap();

    assert_eq!(store.forum_posts()[0].author, "Meera");
    assert_eq!(store.vault()[0].title, "Mail");
}

#[test]
fn unparseable_file_is_kept_aside_not_reseeded_over() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("finance.json");

    let mut store = RecordStore::new(FileStorage::open(&path).unwrap());
    store
        .add_transaction(TransactionKind::Income, transaction(777.0))
        .unwrap();
    drop(store);

    let mut damaged = fs::read(&path).unwrap();
    damaged.push(0xFF);
    fs::write(&path, &damaged).unwrap();

    let store = RecordStore::open(FileStorage::open(&path).unwrap()).unwrap();

    assert_eq!(fs::read(dir.path().join("finance.json.corrupt")).unwrap(), damaged);
    assert!(store.incomes().iter().all(|income| income.amount != 777.0));
    assert!(!fs::read_to_string(&path).unwrap().contains("777"));
}
