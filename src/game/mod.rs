//! Session facade consumed by presentation layers.

pub mod session;

pub use session::KubaGame;
