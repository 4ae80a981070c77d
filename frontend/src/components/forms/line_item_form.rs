use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LineItemFormProps {
    // Form state
    pub item_name: String,
    pub item_quantity: String,
    pub item_price: String,

    // Event handlers
    pub on_name_change: Callback<Event>,
    pub on_quantity_change: Callback<Event>,
    pub on_price_change: Callback<Event>,
    pub on_add: Callback<()>,
}

#[function_component(LineItemForm)]
pub fn line_item_form(props: &LineItemFormProps) -> Html {
    html! {
        <form class="form" onsubmit={
            let on_add = props.on_add.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                on_add.emit(());
            })
        }>
            <input
                type="text"
                class="form__input"
                placeholder="Product Name"
                value={props.item_name.clone()}
                onchange={props.on_name_change.clone()}
            />
            <input
                type="number"
                class="form__input"
                placeholder="Quantity"
                value={props.item_quantity.clone()}
                onchange={props.on_quantity_change.clone()}
            />
            <input
                type="number"
                class="form__input"
                placeholder="Price per unit"
                value={props.item_price.clone()}
                onchange={props.on_price_change.clone()}
            />
            <button class="form__button" type="submit">{"Add"}</button>
        </form>
    }
}
