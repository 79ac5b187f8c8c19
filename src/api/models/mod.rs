mod drink_record;
mod drink_selection;
mod dropped_row;
mod generic_error;
mod upstream_rows;
pub mod resources_xml;

pub use drink_record::*;
pub use drink_selection::*;
pub use dropped_row::*;
pub use generic_error::*;
pub use upstream_rows::*;
