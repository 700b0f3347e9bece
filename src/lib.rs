//! Landing page behaviors for the stack-dev site.
//!
//! Everything is wired once by [`bootstrap::enhance`] against the [`page::Page`]
//! capability surface; [`dom::WebPage`] backs it in the browser.

pub mod anchors;
pub mod bootstrap;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod dom;
pub mod error;
pub mod glow;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod year;
