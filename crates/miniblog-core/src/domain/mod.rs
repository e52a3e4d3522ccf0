//! Domain entities - the core business objects.

mod activity;
mod post;
mod user;

pub use activity::{ActivityAction, ActivityEntry};
pub use post::{Comment, Like, Post, PostId};
pub use user::BlogUser;
