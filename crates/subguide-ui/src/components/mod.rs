//! Yew components for the landing page.

pub(crate) mod access;
pub(crate) mod app_grid;
pub(crate) mod atoms;
pub(crate) mod instructions;
pub(crate) mod nav;
pub(crate) mod platform_tabs;
pub(crate) mod toast;
