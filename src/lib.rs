//! A network of web rings: a binary search tree of named rings, each owning
//! a circular chain of member sites ordered by name length, then name.
//!
//! The [`domain`] layer holds the data structure and its algorithms and does
//! no I/O. [`application`], [`config`] and [`cli`] wrap it with file loading,
//! settings and the `webring` command line.
//!
//! Nothing here is thread-safe; a [`RingTree`] has a single owner.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{Ring, RingTree, SiteChain};
