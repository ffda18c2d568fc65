pub use self::filter::Filter;
pub use self::input::Input;

mod filter;
mod input;
