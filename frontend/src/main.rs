fn main() {
    login_frontend::run();
}
