//! UI module

pub mod components;
