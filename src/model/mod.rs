pub mod event;
pub mod markdown;
pub mod session;
