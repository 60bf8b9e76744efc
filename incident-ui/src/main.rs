fn main() {
    incident_ui::mount();
}
