
#[macro_use]
pub mod macros;
