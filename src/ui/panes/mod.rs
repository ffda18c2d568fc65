pub use self::footer::FooterPane;
pub use self::header::HeaderPane;
pub use self::list::ListPane;

mod footer;
mod header;
mod list;
