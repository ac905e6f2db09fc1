pub mod easing;
pub mod engine;
pub mod layout;
pub mod prize;
pub mod selector;
pub mod text;
