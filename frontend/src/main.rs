fn main() {
    dayflow_frontend::run();
}
