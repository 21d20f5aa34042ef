pub mod consensus;
pub mod decide;
pub mod gate;
pub mod info;
