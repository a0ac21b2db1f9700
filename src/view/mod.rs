pub mod detail;
pub mod modals;
pub mod panels;
