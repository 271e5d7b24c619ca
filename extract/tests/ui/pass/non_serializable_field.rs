use std::cell::RefCell;

use tracked_extract::{MutationCell, carrier, to_map};

#[derive(Default)]
struct Opaque;

carrier! {
    #[derive(Default)]
    struct Mixed {
        label: MutationCell<&'static str>,
        scratch: RefCell<Vec<u8>>,
        handle: Opaque,
    }
}

fn main() {
    let mut mixed = Mixed::default();
    mixed.label.set("x");
    mixed.scratch.borrow_mut().push(1);
    let _ = &mixed.handle;

    let map = to_map(&mixed);
    assert_eq!(map.len(), 1);
    assert_eq!(map["label"], "x");
}
