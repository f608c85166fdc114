mod accessibility;
mod anchors;
mod app_config;
mod boot;
mod chart_animator;
mod dom;
mod facade;
mod image_loader;
mod interactions;
mod layout;
mod print;
mod runtime;
mod styles;

fn main() {
    boot::start();
}
