pub mod footer;
pub mod forms;
pub mod header;
pub mod invoice_details_form;
pub mod item_list;
