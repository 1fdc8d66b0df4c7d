//! Builders for scripted reply line sequences

pub mod replies;

pub use replies::ReplyBuilder;
