use g16tools::cli::modify_main;

fn main() {
    modify_main();
}
