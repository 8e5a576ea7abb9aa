pub mod book;
pub mod id;
pub mod reading_list;
pub mod user;
