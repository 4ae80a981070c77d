use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_send: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let on_send = props.on_send.clone();
    html! {
        <footer class="footer">
            <button
                class="footer__button"
                onclick={Callback::from(move |_: MouseEvent| on_send.emit(()))}
            >
                {"Send Invoice"}
            </button>
        </footer>
    }
}
