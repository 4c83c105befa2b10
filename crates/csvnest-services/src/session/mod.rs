mod service;
mod store;

pub use service::SessionService;
pub use store::LocalStore;
