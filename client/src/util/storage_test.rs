#![cfg(not(feature = "csr"))]

use super::*;
use timeline::AUTH_TOKEN_KEY;

#[test]
fn get_item_is_none_in_native_tests() {
    assert_eq!(BrowserStorage.get_item(AUTH_TOKEN_KEY), None);
}

#[test]
fn set_item_reports_unavailable() {
    let mut storage = BrowserStorage;
    assert_eq!(storage.set_item(AUTH_TOKEN_KEY, "tok"), Err(StorageError::Unavailable));
}

#[test]
fn remove_item_is_noop_but_callable() {
    let mut storage = BrowserStorage;
    storage.remove_item(AUTH_TOKEN_KEY);
}
