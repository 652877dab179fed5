//! Core, DOM-free primitives and helpers for the landing page.
pub mod modal;
pub mod sections;
pub mod store;
pub mod toast;
pub mod view;
