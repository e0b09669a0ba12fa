pub mod ids;
pub mod records;
pub mod rows;
