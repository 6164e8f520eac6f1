/// State management module
///
/// This module handles all application state, including:
/// - The acquired image collection and its selection (gallery.rs)
/// - Tab/pager synchronization for the preview area (pager.rs)
/// - The user profile text fields (profile.rs)

pub mod gallery;
pub mod pager;
pub mod profile;
