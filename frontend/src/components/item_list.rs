use shared::LineItem;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ItemListProps {
    pub items: Vec<LineItem>,
    pub on_remove: Callback<String>,
}

#[function_component(ItemList)]
pub fn item_list(props: &ItemListProps) -> Html {
    html! {
        <ul class="items-list">
            {for props.items.iter().map(|item| {
                let on_remove = props.on_remove.clone();
                let name = item.name.clone();
                html! {
                    <li class="item" key={item.name.clone()}>
                        <span class="item__name">{&item.name}</span>
                        <span class="item__quantity">{format!("Qty: {}", item.quantity)}</span>
                        <span class="item__price">{format!("Price per unit: ${:.2}", item.price)}</span>
                        <span class="item__total">{format!("Total: ${:.2}", item.total)}</span>
                        <button
                            class="item__remove"
                            onclick={Callback::from(move |_: MouseEvent| on_remove.emit(name.clone()))}
                        >
                            {"×"}
                        </button>
                    </li>
                }
            })}
        </ul>
    }
}
