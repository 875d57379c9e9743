pub mod anim;
pub mod color;
pub mod components;
pub mod skin;
pub mod sprite;
