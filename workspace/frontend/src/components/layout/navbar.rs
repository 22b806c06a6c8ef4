use yew::prelude::*;
use yew_router::prelude::*;
use loan_common::SessionContext;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let session = use_context::<SessionContext>().unwrap_or_default();

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="app-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                if let Some(user) = session.user() {
                    <span class="text-sm text-gray-600 hidden md:inline">
                        <i class="fas fa-user mr-2"></i>{ &user.full_name }
                    </span>
                }
                <Link<Route> to={Route::Predict} classes="btn btn-primary btn-sm ml-4">
                    {"New Prediction"}
                </Link<Route>>
            </div>
        </div>
    }
}
