pub mod background;
pub mod bar;
pub mod dancer;
pub mod judgment;
pub mod keys;
pub mod note;
pub mod overlay;
pub mod roll;
pub mod shake;
pub mod stage;
