// Resolution core for item accessibility accommodations. Catalog and family
// tables are parsed upstream; this crate only combines them per item request.
pub mod catalog;
pub mod config;
pub mod context;
pub mod logging;
pub mod resolution;
pub mod sampling;
