mod components;
mod hooks;
mod services;

use components::footer::Footer;
use components::forms::line_item_form::LineItemForm;
use components::header::Header;
use components::invoice_details_form::InvoiceDetailsForm;
use components::item_list::ItemList;
use hooks::use_invoice_draft::use_invoice_draft;
use services::api::ApiClient;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let draft = use_invoice_draft(&api_client);
    let state = draft.state;
    let actions = draft.actions;

    html! {
        <div class="container">
            <Header count_items={state.item_count} />

            <InvoiceDetailsForm
                invoice_number={state.invoice_number}
                customer_name={state.customer_name}
                customer_tax_id={state.customer_tax_id}
                customer_address={state.customer_address}
                postal_code={state.postal_code}
                city={state.city}
                vat_rate={state.vat_rate}
                iprf_rate={state.iprf_rate}
                on_invoice_number_change={actions.on_invoice_number_change.clone()}
                on_customer_name_change={actions.on_customer_name_change.clone()}
                on_customer_tax_id_change={actions.on_customer_tax_id_change.clone()}
                on_customer_address_change={actions.on_customer_address_change.clone()}
                on_postal_code_change={actions.on_postal_code_change.clone()}
                on_city_change={actions.on_city_change.clone()}
                on_vat_rate_change={actions.on_vat_rate_change.clone()}
                on_iprf_rate_change={actions.on_iprf_rate_change.clone()}
            />

            <div class="addform">
                <h1>{"Add product"}</h1>
                <LineItemForm
                    item_name={state.item_name}
                    item_quantity={state.item_quantity}
                    item_price={state.item_price}
                    on_name_change={actions.on_item_name_change.clone()}
                    on_quantity_change={actions.on_item_quantity_change.clone()}
                    on_price_change={actions.on_item_price_change.clone()}
                    on_add={actions.add_item.clone()}
                />
                <ItemList
                    items={state.items}
                    on_remove={actions.remove_item.clone()}
                />
            </div>

            <Footer on_send={actions.send_invoice.clone()} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
