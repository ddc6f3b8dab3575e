mod item;
mod validate;

pub use item::*;
pub use validate::*;
