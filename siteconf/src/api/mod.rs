pub mod data;
pub mod emojis;
pub mod icons;
pub mod identity;
