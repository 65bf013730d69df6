use geocache_icon_cutter::Config;
use geocache_icon_cutter::console;
use geocache_icon_cutter::extract_worker::{ExtractWorker, drain_exit_code};

fn main() {
    env_logger::init();

    let (rx, handle) = ExtractWorker::spawn(Config::default());
    let exit_code = drain_exit_code(rx, handle, console::print);

    std::process::exit(exit_code);
}
