use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InvoiceDetailsFormProps {
    // Header field values
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_tax_id: String,
    pub customer_address: String,
    pub postal_code: String,
    pub city: String,
    pub vat_rate: String,
    pub iprf_rate: String,

    // Event handlers
    pub on_invoice_number_change: Callback<Event>,
    pub on_customer_name_change: Callback<Event>,
    pub on_customer_tax_id_change: Callback<Event>,
    pub on_customer_address_change: Callback<Event>,
    pub on_postal_code_change: Callback<Event>,
    pub on_city_change: Callback<Event>,
    pub on_vat_rate_change: Callback<Event>,
    pub on_iprf_rate_change: Callback<Event>,
}

#[function_component(InvoiceDetailsForm)]
pub fn invoice_details_form(props: &InvoiceDetailsFormProps) -> Html {
    html! {
        <div class="invoice-form">
            <input
                type="text"
                class="form__input"
                placeholder="Invoice Number"
                value={props.invoice_number.clone()}
                onchange={props.on_invoice_number_change.clone()}
            />
            <input
                type="text"
                class="form__input"
                placeholder="Customer Name"
                value={props.customer_name.clone()}
                onchange={props.on_customer_name_change.clone()}
            />
            <input
                type="text"
                class="form__input"
                placeholder="Customer NIF/CIF"
                value={props.customer_tax_id.clone()}
                onchange={props.on_customer_tax_id_change.clone()}
            />
            <input
                type="text"
                class="form__input"
                placeholder="Customer Address"
                value={props.customer_address.clone()}
                onchange={props.on_customer_address_change.clone()}
            />
            <input
                type="text"
                class="form__input"
                placeholder="ZIP"
                value={props.postal_code.clone()}
                onchange={props.on_postal_code_change.clone()}
            />
            <input
                type="text"
                class="form__input"
                placeholder="City"
                value={props.city.clone()}
                onchange={props.on_city_change.clone()}
            />
            <input
                type="number"
                class="form__input"
                placeholder="VAT Rate (%)"
                value={props.vat_rate.clone()}
                onchange={props.on_vat_rate_change.clone()}
            />
            <input
                type="number"
                class="form__input"
                placeholder="IRPF Rate (%)"
                value={props.iprf_rate.clone()}
                onchange={props.on_iprf_rate_change.clone()}
            />
        </div>
    }
}
