pub mod error;
pub mod model;
pub mod store;

pub use error::DomainError;
pub use model::User;
pub use store::UserStore;
