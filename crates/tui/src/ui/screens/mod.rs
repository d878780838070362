pub mod accounts;
pub mod categories;
pub mod home;
pub mod login;
pub mod modal;
pub mod records;
