use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub count_items: usize,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <h1>{"Invoice Items"}</h1>
            <h3>{format!("Total Items: {}", props.count_items)}</h3>
        </header>
    }
}
