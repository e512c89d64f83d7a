//! Platform-independent reactor model.
//!
//! Nothing in here touches `web-sys`, so the whole tree builds on the host and
//! is exercised directly by the integration tests under `tests/`.

pub mod animation;
pub mod chat;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod interaction;
pub mod lifecycle;
pub mod mode;
pub mod particles;
pub mod scene;
pub mod stats;
pub mod voice;

pub use animation::*;
pub use chat::*;
pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use interaction::*;
pub use lifecycle::*;
pub use mode::*;
pub use particles::*;
pub use scene::*;
pub use stats::*;
pub use voice::*;
