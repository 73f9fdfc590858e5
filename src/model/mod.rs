mod event;
mod failure;
mod project;
mod result;

pub use event::EventWindow;
pub use failure::{failed_items, Failure, FailureKind};
pub use project::Project;
pub use result::Result;
