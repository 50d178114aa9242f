pub mod firebase_auth_session;
pub mod hashmap_auth_session;

pub use firebase_auth_session::FirebaseAuthSession;
pub use hashmap_auth_session::HashMapAuthSession;
