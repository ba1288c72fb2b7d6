//! Reusable view components shared across pages.

pub mod carousel;
pub mod image_card;
pub mod nav_bar;
