use reel_web::App;

fn main() {
    dioxus::launch(App);
}
