pub mod compare;
pub mod convert;
pub mod countries;
pub mod setup;
pub mod ui;
