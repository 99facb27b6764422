pub mod csv_reader;
pub mod geo;
pub mod loaders;
pub mod raw_table;
