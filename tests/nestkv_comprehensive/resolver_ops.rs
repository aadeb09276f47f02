//! Path resolution through the database facade

use crate::{db, small_db};
use nestkv::{resolver, Container, Error, StoreError};

#[test]
fn put_then_get_reports_new_key() {
    let db = db();
    for chain in [
        vec![b"one".as_slice()],
        vec![b"a".as_slice(), b"b".as_slice()],
        vec![b"x".as_slice(), b"y".as_slice(), b"z".as_slice()],
    ] {
        assert!(db.put(&chain, b"key", b"value", false).unwrap());
        assert_eq!(db.get(&chain, b"key"), Some(b"value".to_vec()));
    }
}

#[test]
fn second_put_without_overwrite_fails_and_keeps_value() {
    let db = db();
    db.put(&[b"a", b"b"], b"k", b"first", false).unwrap();

    let err = db.put(&[b"a", b"b"], b"k", b"second", false).unwrap_err();
    assert!(err.is_exists());
    assert_eq!(err.to_string(), "key exists \"a, b, k\"");
    assert_eq!(db.get(&[b"a", b"b"], b"k"), Some(b"first".to_vec()));
}

#[test]
fn second_put_with_overwrite_replaces_value() {
    let db = db();
    assert!(db.put(&[b"a"], b"k", b"first", true).unwrap());
    assert!(!db.put(&[b"a"], b"k", b"second", true).unwrap());
    assert_eq!(db.get(&[b"a"], b"k"), Some(b"second".to_vec()));
}

#[test]
fn delete_unwritten_key() {
    let db = db();
    db.put(&[b"a"], b"other", b"v", false).unwrap();
    let version = db.version();

    let err = db.delete(&[b"a"], b"k", true).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "key not found \"a, k\"");

    db.delete(&[b"a"], b"k", false).unwrap();
    db.delete(&[b"a", b"missing"], b"k", false).unwrap();
    assert_eq!(db.get(&[b"a"], b"other"), Some(b"v".to_vec()));
    // neither the failed nor the no-op deletes committed anything
    assert_eq!(db.version(), version);
}

#[test]
fn delete_through_missing_container() {
    let db = db();
    let err = db.delete(&[b"nope", b"deeper"], b"k", true).unwrap_err();
    assert_eq!(err.path(), Some("nope"));
    db.delete(&[b"nope", b"deeper"], b"k", false).unwrap();
    assert_eq!(db.stats().buckets, 0);
}

#[test]
fn delete_container_removes_everything_below() {
    let db = db();
    db.put(&[b"root", b"inner"], b"k1", b"v1", false).unwrap();
    db.put(&[b"root", b"inner", b"deep"], b"k2", b"v2", false).unwrap();
    db.put(&[b"root", b"sibling"], b"k3", b"v3", false).unwrap();

    db.delete_container(&[b"root"], b"inner", true).unwrap();

    assert_eq!(db.get(&[b"root", b"inner"], b"k1"), None);
    assert_eq!(db.get(&[b"root", b"inner", b"deep"], b"k2"), None);
    assert_eq!(db.get(&[b"root", b"sibling"], b"k3"), Some(b"v3".to_vec()));

    let stats = db.stats();
    assert_eq!(stats.buckets, 2);
    assert_eq!(stats.values, 1);
}

#[test]
fn delete_container_missing() {
    let db = db();
    db.put(&[b"a"], b"k", b"v", false).unwrap();

    let err = db.delete_container(&[b"a"], b"b", true).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.path(), Some("a, b"));

    db.delete_container(&[b"a"], b"b", false).unwrap();
    db.delete_container(&[b"x", b"y"], b"z", false).unwrap();
}

#[test]
fn emptied_containers_stay() {
    let db = db();
    db.put(&[b"a", b"b"], b"k", b"v", false).unwrap();
    db.delete(&[b"a", b"b"], b"k", true).unwrap();

    db.view(|root| {
        let b = resolver::container(root, &[b"a", b"b"]).expect("container kept");
        assert!(b.is_empty());
        Ok(())
    })
    .unwrap();
}

#[test]
fn malformed_arity() {
    let db = db();
    assert!(db.put(&[], b"k", b"v", false).unwrap_err().is_malformed());
    assert!(db.delete(&[], b"k", true).unwrap_err().is_malformed());
    assert_eq!(db.get(&[], b"k"), None);

    let err = db
        .update(|root| resolver::put_path(root, false, &[b"only", b"two"]))
        .unwrap_err();
    assert!(matches!(err, Error::Malformed(_)));
}

#[test]
fn segment_list_forms_match_explicit_forms() {
    let db = db();
    db.update(|root| resolver::put_path(root, false, &[b"b1", b"b2", b"k", b"v"]))
        .unwrap();
    assert_eq!(db.get(&[b"b1", b"b2"], b"k"), Some(b"v".to_vec()));

    db.view(|root| {
        assert_eq!(
            resolver::get_path(root, &[b"b1", b"b2", b"k"]),
            Some(b"v".as_slice())
        );
        assert_eq!(resolver::get_path(root, &[b"bX", b"k"]), None);
        Ok(())
    })
    .unwrap();

    db.update(|root| resolver::delete_path(root, true, &[b"b1", b"b2", b"k"]))
        .unwrap();
    db.update(|root| resolver::delete_container_path(root, true, &[b"b1"]))
        .unwrap();
    assert!(db.begin_read().root().is_empty());
}

#[test]
fn limits_surface_as_store_errors() {
    let db = small_db();

    let err = db
        .put(&[b"a"], b"a-key-that-is-too-long", b"v", false)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Store {
            source: StoreError::KeyTooLarge { .. },
            ..
        }
    ));

    let err = db.put(&[b"1", b"2", b"3", b"4"], b"k", b"v", false).unwrap_err();
    match err {
        Error::Store { path, source } => {
            assert_eq!(path, "1, 2, 3, 4");
            assert_eq!(source, StoreError::DepthExceeded { max: 3 });
        }
        other => panic!("unexpected error: {:?}", other),
    }
    // the whole update rolled back
    assert_eq!(db.stats().buckets, 0);
}

#[test]
fn value_and_container_names_do_not_mix() {
    let db = db();
    db.put(&[b"a"], b"name", b"v", false).unwrap();

    let err = db.put(&[b"a", b"name"], b"k", b"v", false).unwrap_err();
    assert!(matches!(
        err,
        Error::Store {
            source: StoreError::IncompatibleValue,
            ..
        }
    ));
    db.view(|root| {
        assert!(root.container(b"a").unwrap().container(b"name").is_none());
        Ok(())
    })
    .unwrap();
}
