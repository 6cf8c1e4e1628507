use famtree_core::ops::member_ops;
use famtree_core::{FamilyMember, NewMember, Store};

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Create a member through the real create operation
#[allow(dead_code)]
pub fn create_test_member(store: &mut Store, name: &str, gender: &str) -> FamilyMember {
    member_ops::create_member(store, NewMember::new(name, gender)).unwrap()
}

/// Store with a small fixed family: Father (1), Wife One (2), Wife Two (3), Child One (4)
#[allow(dead_code)]
pub fn sample_family() -> Store {
    let mut store = Store::new();
    create_test_member(&mut store, "Father", "male");
    create_test_member(&mut store, "Wife One", "female");
    create_test_member(&mut store, "Wife Two", "female");
    create_test_member(&mut store, "Child One", "male");
    store
}
