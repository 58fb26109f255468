//! like check_output, but only checks for normal termination. suitable for
//! single points and other jobs without optimizations

use g16tools::{cli::check_main, scan::Mode};

fn main() {
    check_main(Mode::TerminationOnly);
}
