pub mod index_entry;
pub mod path_key;
