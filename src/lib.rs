pub mod animation;
pub mod content;
pub mod gallery;
pub mod hero;
pub mod i18n;
pub mod typing;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
