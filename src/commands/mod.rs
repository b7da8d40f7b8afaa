//! Command handlers for the postsweep binary

pub mod prune;
mod site_root;
