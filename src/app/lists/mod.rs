pub use self::column::Column;
pub use self::filterable::{BasicFilterContext, FilterContext, FilterData, Filterable};
pub use self::filterable_list::FilterableList;
pub use self::header::Header;
pub use self::item::{Item, Row, RowStringExt};
pub use self::scrollable_list::ScrollableList;
pub use self::trucks_list::TrucksList;

mod column;
mod filterable;
mod filterable_list;
mod header;
mod item;
mod scrollable_list;
mod trucks_list;
