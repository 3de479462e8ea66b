mod context;

pub mod builder;
pub mod details;
pub mod init;
pub mod open;
pub mod overview;
pub mod pages;
pub mod reset;
pub mod wizard;

pub use context::HandlerContext;
