fn main() {
    dioxus::launch(atelier_web::App);
}
