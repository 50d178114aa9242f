pub mod firebase_profile_store;
pub mod hashmap_profile_store;

pub use firebase_profile_store::FirebaseProfileStore;
pub use hashmap_profile_store::HashMapProfileStore;
