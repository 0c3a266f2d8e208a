//! UI Components
//!
//! Page lists, rows and the toolbar.

mod active_list;
mod blank_row;
mod completed_list;
mod export_page;
mod todo_row;
mod toolbar;

pub use active_list::ActiveList;
pub use blank_row::BlankRow;
pub use completed_list::CompletedList;
pub use export_page::ExportPage;
pub use todo_row::TodoRow;
pub use toolbar::Toolbar;
