pub mod paystack;
pub mod signature;
pub mod store;

pub use paystack::PaystackClient;
pub use signature::{sign_body, verify_signature};
pub use store::{InMemoryStore, RecordStore};
