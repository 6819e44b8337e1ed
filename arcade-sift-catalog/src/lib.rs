pub mod error;
pub mod locales;
pub mod machine;
pub mod parser;

pub use error::CatalogError;
pub use locales::{LocaleScan, scan_catalog_locales, scan_locales};
pub use machine::{Catalog, Control, Display, Input, MachineRecord};
pub use parser::{parse_catalog, parse_catalog_file};
