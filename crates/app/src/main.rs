fn main() {
    dioxus::launch(transport_hub::App);
}
