use dioxus::prelude::*;

use ui::components::{LoadingProvider, ToastProvider};
use ui::{use_session, SessionProvider};
use views::{
    AddDistrict, AddRole, AddState, AddUser, Dashboard, Login, NotFound, Permissions, Roles,
    Shell, States, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(Shell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/add-user")]
        AddUser {},
        #[route("/roles")]
        Roles {},
        #[route("/add-role")]
        AddRole {},
        #[route("/permissions")]
        Permissions {},
        #[route("/states")]
        States {},
        #[route("/add-state")]
        AddState {},
        #[route("/add-district")]
        AddDistrict {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    api::set_backend_url(option_env!("BACKEND_URL").unwrap_or("http://localhost:5000/api/v1"));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SessionProvider {
            ToastProvider {
                LoadingProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Root() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Redirect based on session state once the bootstrap completes.
    if !session().loading {
        if session().session.is_some() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
