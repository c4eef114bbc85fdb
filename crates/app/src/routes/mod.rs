pub mod not_found;
pub mod parcels;

use dioxus::prelude::*;

use not_found::NotFound;
use parcels::create::ParcelCreatePage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    ParcelCreatePage {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
