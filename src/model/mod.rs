//! Plain data structures managed by the resource actors.

pub mod order;
pub mod page;
pub mod product;
pub mod user;

pub use order::*;
pub use page::*;
pub use product::*;
pub use user::*;
