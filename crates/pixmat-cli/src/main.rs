use std::io;

use pixmat_cli::{Args, Prompter};

fn main() {
    env_logger::init();

    let args: Args = argh::from_env();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match pixmat_cli::run(args, &mut prompter) {
        Ok(output) => println!("{}", output.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
