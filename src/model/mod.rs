pub mod icon;

pub use icon::{GEOCACHE_ICONS, IconDescriptor};
