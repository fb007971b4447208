mod app;
mod components;
mod pages;
mod routes;
mod storage;
mod theme;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
