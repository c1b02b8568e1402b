fn main() {
    yew::Renderer::<riad_emberiza::App>::new().render();
}
