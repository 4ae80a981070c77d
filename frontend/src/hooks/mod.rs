pub mod use_invoice_draft;
