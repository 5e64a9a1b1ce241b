use std::{env, fs::read_to_string, process, time::Instant};

use pebble::{
    config::ParserConfig, display_error, display_fatal, parse_source, type_context::TypeNames,
};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut assertions = true;
    let mut file_path = None;
    for arg in &args {
        match arg.as_str() {
            "--no-asserts" => assertions = false,
            path if file_path.is_none() => file_path = Some(path.to_string()),
            other => {
                eprintln!("unexpected argument: {}", other);
                usage();
            }
        }
    }

    let Some(file_path) = file_path else {
        usage();
    };

    let file_name = file_path.rsplit('/').next().unwrap_or(file_path.as_str()).to_string();

    let file_contents = match read_to_string(&file_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("failed to read {}: {}", file_path, err);
            process::exit(2);
        }
    };

    let config = ParserConfig::new(file_name).with_assertions(assertions);
    let types = TypeNames::new();

    let start = Instant::now();
    let output = match parse_source(&file_contents, &types, &config) {
        Ok(output) => output,
        Err(err) => {
            display_fatal(&err, &file_contents);
            process::exit(1);
        }
    };
    println!("Parsed in {:?}", start.elapsed());

    if !output.is_ok() {
        for diagnostic in &output.diagnostics {
            display_error(diagnostic, &file_contents);
        }
        println!("{} error(s)", output.error_count());
        process::exit(1);
    }

    match output.root {
        Some(root) => println!("{}", pretty_print(root.to_string())),
        None => println!("<empty script>"),
    }
}

fn usage() -> ! {
    eprintln!("usage: pebble <file> [--no-asserts]");
    process::exit(2);
}

/// Breaks the single-line tree rendering at braces and semicolons.
fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut ignore_next_space = false;
    let mut in_string = false;

    for c in string.chars() {
        if c == '"' {
            in_string = !in_string;
        }
        if in_string || c == '"' {
            result.push(c);
            continue;
        }

        match c {
            '{' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '}' => {
                indent = indent.saturating_sub(1);
                let trimmed = result.trim_end().len();
                result.truncate(trimmed);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ';' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => {
                ignore_next_space = false;
                result.push(c);
            }
        }
    }

    result.trim_end().to_string()
}
