//! Mail transport implementations

pub mod smtp;
