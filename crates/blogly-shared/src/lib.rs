//! # Blogly Shared
//!
//! Request DTOs shared between the web server and its tests: one explicit
//! struct per HTML form.

pub mod forms;

pub use forms::{FormError, PostForm, TagForm, UserForm};
