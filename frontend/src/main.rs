use crate::app::App;

mod app;
mod components;
mod overlay;
mod storage;
mod streets;

fn main() {
    yew::Renderer::<App>::new().render();
}
