pub mod client;
pub mod identity_verifier;
pub mod jwt_verifier;
pub mod object_storage;
