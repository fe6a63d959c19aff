use crate::app::App;

mod app;
mod components;
mod dispatch;
mod listeners;
mod logger;

fn main() {
    logger::init();
    yew::Renderer::<App>::new().render();
}
