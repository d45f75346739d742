//! Primitive Domino API data types and NewType-patterns.

mod enums;
mod host_url;
mod ids;
mod project_id;
mod strings;
mod version;

pub use enums::*;
pub use host_url::*;
pub use ids::*;
pub use project_id::*;
pub use strings::*;
pub use version::*;
