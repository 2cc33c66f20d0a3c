mod local_store;

pub use local_store::{LocalStore, STORE_DIR, STORE_KEY};
