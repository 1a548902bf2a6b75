use bonushedge::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
