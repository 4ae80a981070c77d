pub mod line_item_form;
