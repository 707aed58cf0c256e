use colored::Colorize;

fn main() {
    if let Err(err) = reaction_force::run() {
        eprintln!("{} {:#}", "[reaction-force]:".red().bold(), err);
        std::process::exit(1);
    }
}
