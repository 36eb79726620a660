use std::io::Read;

use vesper_compiler::compiler;
use vesper_compiler::disasm;

const USAGE: &str = "usage: vesper [options] [script]
Available options are:
  -e stat  compile string 'stat'
  -l       list the compiled bytecode
  -v       show version information
  -        compile stdin
  --       stop handling options";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut script_file: Option<String> = None;
    let mut exec_statements: Vec<String> = Vec::new();
    let mut list_bytecode = false;
    let mut show_version = false;
    let mut saw_dashdash = false;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        if saw_dashdash {
            script_file = Some(args[i].clone());
            break;
        }
        match args[i].as_str() {
            "--" => {
                saw_dashdash = true;
                i += 1;
            }
            "-v" => {
                show_version = true;
                i += 1;
            }
            "-l" => {
                list_bytecode = true;
                i += 1;
            }
            "-e" => {
                if i + 1 >= args.len() {
                    eprintln!("vesper: '-e' needs argument");
                    std::process::exit(1);
                }
                exec_statements.push(args[i + 1].clone());
                i += 2;
            }
            _ => {
                if args[i].starts_with('-') && args[i] != "-" {
                    // Check for combined forms like -e"code"
                    if args[i].starts_with("-e") && args[i].len() > 2 {
                        exec_statements.push(args[i][2..].to_string());
                        i += 1;
                    } else {
                        eprintln!("vesper: unrecognized option '{}'", args[i]);
                        eprintln!("{USAGE}");
                        std::process::exit(1);
                    }
                } else {
                    script_file = Some(args[i].clone());
                    break;
                }
            }
        }
    }

    if show_version {
        println!("Vesper 0.1.0");
    }

    if script_file.is_none() && exec_statements.is_empty() {
        if !show_version {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
        return;
    }

    let mut ok = true;

    for stat in &exec_statements {
        ok &= check_source(stat.as_bytes(), "(command line)", list_bytecode);
    }

    if let Some(ref path) = script_file {
        if path == "-" {
            let mut buf = Vec::new();
            if let Err(e) = std::io::stdin().read_to_end(&mut buf) {
                eprintln!("vesper: cannot read stdin: {e}");
                std::process::exit(1);
            }
            ok &= check_source(&buf, "stdin", list_bytecode);
        } else {
            let source = match std::fs::read(path) {
                Ok(data) => data,
                Err(e) => {
                    eprintln!("vesper: cannot open {path}: {e}");
                    std::process::exit(1);
                }
            };
            let source = strip_shebang(&source);
            ok &= check_source(source, path, list_bytecode);
        }
    }

    if !ok {
        std::process::exit(1);
    }
}

/// Compile one source, reporting diagnostics. Returns false on error.
fn check_source(source: &[u8], name: &str, list_bytecode: bool) -> bool {
    match compiler::compile(source) {
        Ok((function, strings)) => {
            if list_bytecode {
                print!("{}", disasm::disassemble(&function, &strings));
            }
            true
        }
        Err(errors) => {
            for e in &errors.errors {
                eprintln!("vesper: {name}:{e}");
            }
            false
        }
    }
}

fn strip_shebang(source: &[u8]) -> &[u8] {
    if source.starts_with(b"#") {
        // Skip to end of first line
        if let Some(pos) = source.iter().position(|&b| b == b'\n') {
            &source[pos..]
        } else {
            b""
        }
    } else {
        source
    }
}
