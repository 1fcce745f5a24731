//! Project generation adapters.

mod simple;

pub use simple::{SimpleGenerator, find_template, render};
