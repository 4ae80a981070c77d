use gloo::dialogs;
use shared::{HeaderField, InvoiceDraft, LineItem};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Everything the view needs to render the current draft.
#[derive(Clone, PartialEq)]
pub struct InvoiceDraftState {
    pub items: Vec<LineItem>,
    pub item_count: usize,
    pub subtotal: f64,

    // Invoice header inputs
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_tax_id: String,
    pub customer_address: String,
    pub postal_code: String,
    pub city: String,
    pub vat_rate: String,
    pub iprf_rate: String,

    // Transient line-item form inputs, cleared on a successful add
    pub item_name: String,
    pub item_quantity: String,
    pub item_price: String,
}

pub struct UseInvoiceDraftResult {
    pub state: InvoiceDraftState,
    pub actions: UseInvoiceDraftActions,
}

#[derive(Clone, PartialEq)]
pub struct UseInvoiceDraftActions {
    pub add_item: Callback<()>,
    pub remove_item: Callback<String>,
    pub send_invoice: Callback<()>,
    pub on_invoice_number_change: Callback<Event>,
    pub on_customer_name_change: Callback<Event>,
    pub on_customer_tax_id_change: Callback<Event>,
    pub on_customer_address_change: Callback<Event>,
    pub on_postal_code_change: Callback<Event>,
    pub on_city_change: Callback<Event>,
    pub on_vat_rate_change: Callback<Event>,
    pub on_iprf_rate_change: Callback<Event>,
    pub on_item_name_change: Callback<Event>,
    pub on_item_quantity_change: Callback<Event>,
    pub on_item_price_change: Callback<Event>,
}

fn header_field_callback(draft: &UseStateHandle<InvoiceDraft>, field: HeaderField) -> Callback<Event> {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        next.set_header(field, input.value());
        draft.set(next);
    })
}

fn input_callback(handle: &UseStateHandle<String>) -> Callback<Event> {
    let handle = handle.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

/// Owns the invoice draft plus the transient line-item inputs, and
/// exposes the add/remove/send actions the components wire up.
#[hook]
pub fn use_invoice_draft(api_client: &ApiClient) -> UseInvoiceDraftResult {
    let draft = use_state(InvoiceDraft::new);

    // Line-item form inputs live outside the draft: they are form
    // scratch space, not invoice data, until a successful add
    let item_name = use_state(String::new);
    let item_quantity = use_state(String::new);
    let item_price = use_state(String::new);

    let add_item = {
        let draft = draft.clone();
        let item_name = item_name.clone();
        let item_quantity = item_quantity.clone();
        let item_price = item_price.clone();

        Callback::from(move |_| {
            let mut next = (*draft).clone();
            match next.add_item(&item_name, &item_quantity, &item_price) {
                Ok(()) => {
                    draft.set(next);
                    item_name.set(String::new());
                    item_quantity.set(String::new());
                    item_price.set(String::new());
                }
                Err(err) => {
                    Logger::warn_with_component(
                        "line-item-form",
                        &format!("Rejected line item: {}", err),
                    );
                    dialogs::alert("Please enter valid data.");
                }
            }
        })
    };

    let remove_item = {
        let draft = draft.clone();
        Callback::from(move |name: String| {
            let mut next = (*draft).clone();
            next.remove_item(&name);
            draft.set(next);
        })
    };

    // Fire-and-forget: the button is never disabled and nothing stops a
    // second send from racing the first. The draft survives success and
    // failure alike, so a failed send can simply be retried.
    let send_invoice = {
        let draft = draft.clone();
        let api_client = api_client.clone();

        Callback::from(move |_| {
            let payload = draft.to_payload();
            let api_client = api_client.clone();

            spawn_local(async move {
                match api_client.generate_invoice(&payload).await {
                    Ok(body) => {
                        Logger::info_with_component(
                            "send-invoice",
                            &format!("generate-invoice response: {}", body),
                        );
                        dialogs::alert("Invoice sent successfully!");
                    }
                    Err(err) => {
                        Logger::error_with_component(
                            "send-invoice",
                            &format!("Error generating invoice: {}", err),
                        );
                        dialogs::alert("Failed to send invoice.");
                    }
                }
            });
        })
    };

    let actions = UseInvoiceDraftActions {
        add_item,
        remove_item,
        send_invoice,
        on_invoice_number_change: header_field_callback(&draft, HeaderField::InvoiceNumber),
        on_customer_name_change: header_field_callback(&draft, HeaderField::CustomerName),
        on_customer_tax_id_change: header_field_callback(&draft, HeaderField::CustomerTaxId),
        on_customer_address_change: header_field_callback(&draft, HeaderField::CustomerAddress),
        on_postal_code_change: header_field_callback(&draft, HeaderField::PostalCode),
        on_city_change: header_field_callback(&draft, HeaderField::City),
        on_vat_rate_change: {
            let draft = draft.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*draft).clone();
                next.set_vat_rate(input.value());
                draft.set(next);
            })
        },
        on_iprf_rate_change: {
            let draft = draft.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*draft).clone();
                next.set_iprf_rate(input.value());
                draft.set(next);
            })
        },
        on_item_name_change: input_callback(&item_name),
        on_item_quantity_change: input_callback(&item_quantity),
        on_item_price_change: input_callback(&item_price),
    };

    let state = InvoiceDraftState {
        items: draft.items().to_vec(),
        item_count: draft.item_count(),
        subtotal: draft.subtotal(),
        invoice_number: draft.invoice_number.clone(),
        customer_name: draft.customer_name.clone(),
        customer_tax_id: draft.customer_tax_id.clone(),
        customer_address: draft.customer_address.clone(),
        postal_code: draft.postal_code.clone(),
        city: draft.city.clone(),
        vat_rate: draft.vat_rate.clone(),
        iprf_rate: draft.iprf_rate.clone(),
        item_name: (*item_name).clone(),
        item_quantity: (*item_quantity).clone(),
        item_price: (*item_price).clone(),
    };

    UseInvoiceDraftResult { state, actions }
}
