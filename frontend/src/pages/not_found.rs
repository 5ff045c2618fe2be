use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    use_effect_with_deps(
        |path: &String| {
            warn!("404: no page at {}", path);
            || ()
        },
        path.clone(),
    );

    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p class="muted">{format!("Oops! Nothing lives at {}", path)}</p>
            <Link<Route> to={Route::Home} classes="btn-primary">
                {"Return to Home"}
            </Link<Route>>
        </div>
    }
}
