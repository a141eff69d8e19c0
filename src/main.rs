fn main() {
    dioxus::launch(campus_ads::client::App);
}
