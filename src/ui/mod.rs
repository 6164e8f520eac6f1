/// Screen chrome: the tab bar, the thumbnail strip, and the empty state.

pub mod empty;
pub mod strip;
pub mod tabs;
