pub mod footer;
pub mod header;
pub mod history_list;
pub mod location_form;
pub mod viewer;
