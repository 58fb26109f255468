use g16tools::{cli::check_main, scan::Mode};

fn main() {
    check_main(Mode::Full);
}
