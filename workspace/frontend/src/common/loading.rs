use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub text: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center h-64 gap-4">
            <span class="loading loading-spinner loading-lg"></span>
            <p class="text-sm text-gray-600">{&props.text}</p>
        </div>
    }
}
