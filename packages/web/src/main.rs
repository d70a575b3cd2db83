use dioxus::prelude::*;

use ui::views::Home;
use ui::BackendProvider;

mod settings;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    // The backend is configured once here and handed to the tree as context.
    let config = settings::load();
    tracing::info!(host = ?config.host, "starting");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        BackendProvider {
            Router::<Route> {}
        }
    }
}
