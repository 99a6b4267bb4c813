use std::{env, fs, process};

use rustic::{compile, display_error};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: rustic <input> [output]");
        process::exit(1);
    }

    let input_path = &args[1];
    let source = match fs::read_to_string(input_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("failed to read {}: {}", input_path, error);
            process::exit(1);
        }
    };

    let output = match compile(&source, Some(input_path.clone())) {
        Ok(output) => output,
        Err(error) => {
            display_error(&error, &source, input_path);
            process::exit(1);
        }
    };

    match args.get(2) {
        Some(output_path) => {
            if let Err(error) = fs::write(output_path, output) {
                eprintln!("failed to write {}: {}", output_path, error);
                process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}
