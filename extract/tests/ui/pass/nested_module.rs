mod model {
    use serde::Serialize;
    use tracked_extract::{MutationCell, carrier};

    carrier! {
        /// Partial update for an account.
        #[derive(Default, Serialize)]
        pub struct AccountPatch {
            /// Display name.
            #[serde(rename = "displayName")]
            pub display_name: MutationCell<String> => "displayName",
            pub(crate) quota: MutationCell<Option<u64>> => "quota,omitempty",
            version: u32,
        }
    }

    impl AccountPatch {
        pub fn version(&self) -> u32 {
            self.version
        }
    }
}

fn main() {
    let mut patch = model::AccountPatch::default();
    patch.display_name.set("ops".to_string());
    patch.quota.set(None);

    let map = tracked_extract::to_map(&patch);
    assert_eq!(map.len(), 2);
    assert_eq!(map["displayName"], "ops");
    assert!(map["quota"].is_null());
    assert_eq!(patch.version(), 0);
}
