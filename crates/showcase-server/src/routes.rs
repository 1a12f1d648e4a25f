//! HTTP routes

pub mod catalog;
pub mod pages;
