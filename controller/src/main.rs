mod modules;
mod utilities;

fn main() -> std::io::Result<()> {
    utilities::logging::init_tracing();
    modules::run()
}
