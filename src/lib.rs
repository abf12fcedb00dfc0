//! Feed Shell
//!
//! Terminal rendition of a social dashboard: a scrolling news feed with a
//! post composer, a right rail of stories, suggested groups and chat
//! contacts, a navigation sidebar and a header, all over mock data.
//!
//! Pure Core / Impure Shell: `collections`, `state` and `layout` are plain
//! functions over owned data; `view` owns the terminal and the event loop.

pub mod collections;
pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

// Startup glue between config and the core
pub mod integration;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
