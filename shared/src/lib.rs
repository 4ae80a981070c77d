use serde::{Deserialize, Serialize};
use std::fmt;

/// One product entry on the invoice being drafted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name; also the item's identity key for removal
    pub name: String,
    pub quantity: f64,
    /// Price per unit
    pub price: f64,
    /// Snapshot of quantity * price taken at insertion time; never
    /// recomputed afterwards (there is no edit operation on items)
    pub total: f64,
}

/// The free-text header fields of an invoice draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    InvoiceNumber,
    CustomerName,
    CustomerTaxId,
    CustomerAddress,
    PostalCode,
    City,
}

/// Why a line-item submission was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemInputError {
    EmptyName,
    InvalidQuantity(String),
    QuantityNotPositive(f64),
    InvalidPrice(String),
    PriceNotPositive(f64),
}

impl fmt::Display for ItemInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemInputError::EmptyName => write!(f, "Product name is empty"),
            ItemInputError::InvalidQuantity(input) => {
                write!(f, "Quantity {:?} is not a number", input)
            }
            ItemInputError::QuantityNotPositive(value) => {
                write!(f, "Quantity {} is not positive", value)
            }
            ItemInputError::InvalidPrice(input) => {
                write!(f, "Price {:?} is not a number", input)
            }
            ItemInputError::PriceNotPositive(value) => {
                write!(f, "Price {} is not positive", value)
            }
        }
    }
}

impl std::error::Error for ItemInputError {}

/// The complete in-memory invoice-in-progress: header fields plus an
/// ordered list of line items.
///
/// Constructed empty, mutated in place by user actions, discarded when
/// the session ends. Items can only be changed through [`add_item`] and
/// [`remove_item`], which keeps insertion order authoritative.
///
/// Items are keyed by name for removal (all matches are removed) but
/// names are deliberately NOT deduplicated on add, so the same product
/// can appear as several lines and a single removal takes all of them.
///
/// [`add_item`]: InvoiceDraft::add_item
/// [`remove_item`]: InvoiceDraft::remove_item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_tax_id: String,
    pub customer_address: String,
    pub postal_code: String,
    pub city: String,
    /// Raw text of the VAT rate input; parsed only when the payload is built
    pub vat_rate: String,
    /// Raw text of the IRPF rate input; parsed only when the payload is built
    pub iprf_rate: String,
    items: Vec<LineItem>,
}

impl InvoiceDraft {
    /// Create an empty draft. One draft per session; no persistence,
    /// no undo history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append one line item.
    ///
    /// Rejects (leaving the draft untouched) unless the name is
    /// non-empty and both texts parse to finite numbers strictly
    /// greater than zero. On success the item's `total` is computed
    /// once and stored with the item.
    ///
    /// A name that duplicates an existing item is appended as a new
    /// line; no merge, no uniqueness check.
    pub fn add_item(
        &mut self,
        name: &str,
        quantity_text: &str,
        price_text: &str,
    ) -> Result<(), ItemInputError> {
        if name.is_empty() {
            return Err(ItemInputError::EmptyName);
        }

        let quantity = parse_finite(quantity_text)
            .ok_or_else(|| ItemInputError::InvalidQuantity(quantity_text.to_string()))?;
        if quantity <= 0.0 {
            return Err(ItemInputError::QuantityNotPositive(quantity));
        }

        let price = parse_finite(price_text)
            .ok_or_else(|| ItemInputError::InvalidPrice(price_text.to_string()))?;
        if price <= 0.0 {
            return Err(ItemInputError::PriceNotPositive(price));
        }

        let total = quantity * price;
        self.items.push(LineItem {
            name: name.to_string(),
            quantity,
            price,
            total,
        });
        Ok(())
    }

    /// Remove every item whose name equals the given key, preserving
    /// the relative order of the remainder. A no-op when nothing
    /// matches.
    pub fn remove_item(&mut self, name: &str) {
        self.items.retain(|item| item.name != name);
    }

    /// Set one header field verbatim; no validation.
    pub fn set_header(&mut self, field: HeaderField, value: String) {
        match field {
            HeaderField::InvoiceNumber => self.invoice_number = value,
            HeaderField::CustomerName => self.customer_name = value,
            HeaderField::CustomerTaxId => self.customer_tax_id = value,
            HeaderField::CustomerAddress => self.customer_address = value,
            HeaderField::PostalCode => self.postal_code = value,
            HeaderField::City => self.city = value,
        }
    }

    pub fn set_vat_rate(&mut self, value: String) {
        self.vat_rate = value;
    }

    pub fn set_iprf_rate(&mut self, value: String) {
        self.iprf_rate = value;
    }

    /// Current line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of the stored item totals; 0 for an empty draft. Tax rates
    /// are not applied client-side.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|item| item.total).sum()
    }

    /// Build the request body for the generate-invoice endpoint from
    /// the current draft state. Pure; the draft is not consumed,
    /// cleared, or otherwise changed, so a failed submission can simply
    /// be retried.
    pub fn to_payload(&self) -> InvoicePayload {
        InvoicePayload {
            invoice_number: self.invoice_number.clone(),
            customer_name: self.customer_name.clone(),
            customer_nif_cif: self.customer_tax_id.clone(),
            customer_address: self.customer_address.clone(),
            zip: self.postal_code.clone(),
            city: self.city.clone(),
            items: self.items.clone(),
            subtotal: self.subtotal(),
            vat_rate: parse_rate(&self.vat_rate),
            iprf_rate: parse_rate(&self.iprf_rate),
        }
    }
}

/// Parse user input as a finite number. `f64::from_str` accepts "inf"
/// and "NaN", which are never valid quantities or prices.
fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Tax-rate inputs are transmitted as numbers even when unparsable:
/// bad input becomes NaN, which serde_json writes as JSON null.
fn parse_rate(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// Wire format of the generate-invoice request body. Field names match
/// the endpoint contract exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    pub invoice_number: String,
    pub customer_name: String,
    #[serde(rename = "customerNIFCIF")]
    pub customer_nif_cif: String,
    pub customer_address: String,
    #[serde(rename = "ZIP")]
    pub zip: String,
    pub city: String,
    pub items: Vec<LineItem>,
    /// Sum of line-item totals, prior to tax rate application
    pub subtotal: f64,
    pub vat_rate: f64,
    pub iprf_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_items(items: &[(&str, &str, &str)]) -> InvoiceDraft {
        let mut draft = InvoiceDraft::new();
        for (name, quantity, price) in items {
            draft
                .add_item(name, quantity, price)
                .expect("test item should be valid");
        }
        draft
    }

    #[test]
    fn test_add_item_appends_with_snapshot_total() {
        let mut draft = InvoiceDraft::new();
        assert!(draft.add_item("Widget", "3", "2.50").is_ok());

        assert_eq!(
            draft.items(),
            &[LineItem {
                name: "Widget".to_string(),
                quantity: 3.0,
                price: 2.5,
                total: 7.5,
            }]
        );
    }

    #[test]
    fn test_add_item_rejects_empty_name() {
        let mut draft = InvoiceDraft::new();
        let result = draft.add_item("", "3", "2.50");

        assert_eq!(result, Err(ItemInputError::EmptyName));
        assert_eq!(draft.item_count(), 0);
    }

    #[test]
    fn test_add_item_rejects_unparsable_numbers() {
        let mut draft = InvoiceDraft::new();

        assert_eq!(
            draft.add_item("Widget", "three", "2.50"),
            Err(ItemInputError::InvalidQuantity("three".to_string()))
        );
        assert_eq!(
            draft.add_item("Widget", "3", ""),
            Err(ItemInputError::InvalidPrice("".to_string()))
        );
        assert_eq!(draft.item_count(), 0);
    }

    #[test]
    fn test_add_item_rejects_non_finite_numbers() {
        let mut draft = InvoiceDraft::new();

        // f64::from_str parses these, but they are not valid input
        assert_eq!(
            draft.add_item("Widget", "inf", "2.50"),
            Err(ItemInputError::InvalidQuantity("inf".to_string()))
        );
        assert_eq!(
            draft.add_item("Widget", "3", "NaN"),
            Err(ItemInputError::InvalidPrice("NaN".to_string()))
        );
        assert_eq!(draft.item_count(), 0);
    }

    #[test]
    fn test_add_item_rejects_non_positive_numbers() {
        let mut draft = InvoiceDraft::new();

        assert_eq!(
            draft.add_item("Widget", "0", "2.50"),
            Err(ItemInputError::QuantityNotPositive(0.0))
        );
        assert_eq!(
            draft.add_item("Widget", "3", "-1"),
            Err(ItemInputError::PriceNotPositive(-1.0))
        );
        assert_eq!(draft.item_count(), 0);
    }

    #[test]
    fn test_add_item_accepts_fractional_quantities() {
        let mut draft = InvoiceDraft::new();
        assert!(draft.add_item("Cable", "1.5", "2").is_ok());
        assert_eq!(draft.items()[0].total, 3.0);
    }

    #[test]
    fn test_add_item_appends_duplicate_names_as_separate_lines() {
        let draft = draft_with_items(&[("A", "2", "5"), ("A", "1", "1")]);

        assert_eq!(draft.item_count(), 2);
        assert_eq!(draft.items()[0].total, 10.0);
        assert_eq!(draft.items()[1].total, 1.0);
    }

    #[test]
    fn test_items_preserve_insertion_order() {
        let draft = draft_with_items(&[("B", "1", "1"), ("A", "1", "1"), ("C", "1", "1")]);

        let names: Vec<&str> = draft.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_remove_item_removes_all_matches_and_keeps_order() {
        let mut draft = draft_with_items(&[
            ("A", "1", "1"),
            ("B", "1", "1"),
            ("A", "2", "2"),
            ("C", "1", "1"),
        ]);

        draft.remove_item("A");

        let names: Vec<&str> = draft.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["B", "C"]);
    }

    #[test]
    fn test_remove_item_with_duplicate_names_empties_the_list() {
        let mut draft = draft_with_items(&[("A", "2", "5"), ("A", "1", "1")]);

        draft.remove_item("A");

        assert_eq!(draft.items(), &[]);
    }

    #[test]
    fn test_remove_item_is_noop_for_unknown_name() {
        let mut draft = draft_with_items(&[("A", "2", "5")]);
        let before = draft.clone();

        draft.remove_item("missing");

        assert_eq!(draft, before);
    }

    #[test]
    fn test_subtotal_sums_item_totals() {
        let draft = draft_with_items(&[("A", "2", "5"), ("B", "1", "10")]);
        assert_eq!(draft.subtotal(), 20.0);
    }

    #[test]
    fn test_subtotal_is_zero_for_empty_draft() {
        assert_eq!(InvoiceDraft::new().subtotal(), 0.0);
    }

    #[test]
    fn test_total_is_a_snapshot_not_a_formula() {
        let mut draft = draft_with_items(&[("A", "2", "5")]);
        // Later mutations must not touch totals recorded at add time
        draft.add_item("B", "1", "100").unwrap();
        draft.remove_item("B");

        assert_eq!(draft.items()[0].total, 10.0);
        assert_eq!(draft.subtotal(), 10.0);
    }

    #[test]
    fn test_set_header_assigns_each_field_verbatim() {
        let mut draft = InvoiceDraft::new();

        draft.set_header(HeaderField::InvoiceNumber, "INV-001".to_string());
        draft.set_header(HeaderField::CustomerName, "ACME S.L.".to_string());
        draft.set_header(HeaderField::CustomerTaxId, "B12345678".to_string());
        draft.set_header(HeaderField::CustomerAddress, "Calle Mayor 1".to_string());
        draft.set_header(HeaderField::PostalCode, "28001".to_string());
        draft.set_header(HeaderField::City, "Madrid".to_string());

        assert_eq!(draft.invoice_number, "INV-001");
        assert_eq!(draft.customer_name, "ACME S.L.");
        assert_eq!(draft.customer_tax_id, "B12345678");
        assert_eq!(draft.customer_address, "Calle Mayor 1");
        assert_eq!(draft.postal_code, "28001");
        assert_eq!(draft.city, "Madrid");
    }

    #[test]
    fn test_to_payload_carries_header_items_and_subtotal() {
        let mut draft = draft_with_items(&[("A", "2", "5"), ("B", "1", "10")]);
        draft.set_header(HeaderField::InvoiceNumber, "INV-001".to_string());
        draft.set_header(HeaderField::CustomerTaxId, "B12345678".to_string());
        draft.set_vat_rate("21".to_string());
        draft.set_iprf_rate("15".to_string());

        let payload = draft.to_payload();

        assert_eq!(payload.invoice_number, "INV-001");
        assert_eq!(payload.customer_nif_cif, "B12345678");
        assert_eq!(payload.items.len(), 2);
        assert_eq!(payload.subtotal, 20.0);
        assert_eq!(payload.vat_rate, 21.0);
        assert_eq!(payload.iprf_rate, 15.0);
    }

    #[test]
    fn test_to_payload_does_not_mutate_the_draft() {
        let mut draft = draft_with_items(&[("A", "2", "5")]);
        draft.set_header(HeaderField::City, "Madrid".to_string());
        let before = draft.clone();

        let _ = draft.to_payload();
        let _ = draft.to_payload();

        assert_eq!(draft, before);
    }

    #[test]
    fn test_payload_json_uses_the_endpoint_field_names() {
        let mut draft = draft_with_items(&[("Widget", "3", "2.50")]);
        draft.set_header(HeaderField::PostalCode, "28001".to_string());
        draft.set_vat_rate("21".to_string());
        draft.set_iprf_rate("15".to_string());

        let json = serde_json::to_value(draft.to_payload()).unwrap();
        let object = json.as_object().unwrap();

        for key in [
            "invoiceNumber",
            "customerName",
            "customerNIFCIF",
            "customerAddress",
            "ZIP",
            "city",
            "items",
            "subtotal",
            "vatRate",
            "iprfRate",
        ] {
            assert!(object.contains_key(key), "payload is missing key {key}");
        }

        assert_eq!(json["ZIP"], "28001");
        assert_eq!(json["subtotal"], 7.5);
        let item = &json["items"][0];
        assert_eq!(item["name"], "Widget");
        assert_eq!(item["quantity"], 3.0);
        assert_eq!(item["price"], 2.5);
        assert_eq!(item["total"], 7.5);
    }

    #[test]
    fn test_unparsable_tax_rates_serialize_as_null() {
        let draft = InvoiceDraft::new();

        let payload = draft.to_payload();
        assert!(payload.vat_rate.is_nan());
        assert!(payload.iprf_rate.is_nan());

        let json = serde_json::to_value(payload).unwrap();
        assert!(json["vatRate"].is_null());
        assert!(json["iprfRate"].is_null());
    }
}
