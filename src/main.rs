fn main() {
    yew::Renderer::<billwise::App>::new().render();
}
