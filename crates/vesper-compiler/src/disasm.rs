/// Bytecode disassembler: human-readable listing of a compiled function.
use crate::chunk::{Chunk, ObjFunction, Value};
use crate::opcode::OpCode;
use std::fmt::Write;
use vesper_core::string::StringInterner;

/// Disassemble a function (and every function in its constant pool) into a
/// readable listing.
pub fn disassemble(function: &ObjFunction, strings: &StringInterner) -> String {
    let mut out = String::new();
    disassemble_function(&mut out, function, strings, 0);
    out
}

fn function_label(function: &ObjFunction, strings: &StringInterner) -> String {
    match function.name {
        Some(id) => format!("func {}", strings.get_lossy(id)),
        None => "<script>".to_string(),
    }
}

fn disassemble_function(
    out: &mut String,
    function: &ObjFunction,
    strings: &StringInterner,
    level: usize,
) {
    let indent = "  ".repeat(level);
    let chunk = &function.chunk;

    writeln!(
        out,
        "{indent}{} ({} params, {} bytes, {} constants)",
        function_label(function, strings),
        function.arity,
        chunk.code.len(),
        chunk.constants.len(),
    )
    .unwrap();

    let mut offset = 0;
    let mut last_line = 0;
    while offset < chunk.code.len() {
        let line = chunk.lines[offset];
        let line_str = if line == last_line {
            "   |".to_string()
        } else {
            format!("{line:>4}")
        };
        last_line = line;
        write!(out, "{indent}{offset:04} {line_str}  ").unwrap();
        offset = disasm_instruction(out, chunk, offset, strings);
        writeln!(out).unwrap();
    }

    if !chunk.constants.is_empty() {
        writeln!(out, "{indent}constants ({}):", chunk.constants.len()).unwrap();
        for (i, k) in chunk.constants.iter().enumerate() {
            write!(out, "{indent}  {i:3}  ").unwrap();
            format_constant(out, k, strings);
            writeln!(out).unwrap();
        }
    }

    // Nested functions live in the constant pool
    for k in &chunk.constants {
        if let Value::Function(f) = k {
            disassemble_function(out, f, strings, level + 1);
        }
    }
}

/// Disassemble the instruction at `offset`; returns the next offset.
pub fn disasm_instruction(
    out: &mut String,
    chunk: &Chunk,
    offset: usize,
    strings: &StringInterner,
) -> usize {
    let op = match chunk.opcode_at(offset) {
        Some(op) => op,
        None => {
            write!(out, "<bad opcode {:#04x}>", chunk.code[offset]).unwrap();
            return offset + 1;
        }
    };
    write!(out, "{:<16}", op.name()).unwrap();

    match op.operand_len() {
        0 => offset + 1,
        1 => {
            let operand = chunk.code[offset + 1];
            write!(out, "{operand}").unwrap();
            match op {
                OpCode::Constant
                | OpCode::GetGlobal
                | OpCode::SetGlobal
                | OpCode::DefineGlobal => {
                    if let Some(k) = chunk.constants.get(operand as usize) {
                        write!(out, "  ; ").unwrap();
                        format_constant(out, k, strings);
                    }
                }
                _ => {}
            }
            offset + 2
        }
        _ => {
            let delta =
                u16::from_be_bytes([chunk.code[offset + 1], chunk.code[offset + 2]]) as usize;
            let target = if op == OpCode::Loop {
                (offset + 3).wrapping_sub(delta)
            } else {
                offset + 3 + delta
            };
            write!(out, "{delta}  ; to {target:04}").unwrap();
            offset + 3
        }
    }
}

fn format_constant(out: &mut String, k: &Value, strings: &StringInterner) {
    match k {
        Value::Nil => write!(out, "nil").unwrap(),
        Value::Bool(b) => write!(out, "{b}").unwrap(),
        Value::Number(n) => write!(out, "{n}").unwrap(),
        Value::Str(id) => write!(out, "\"{}\"", strings.get_lossy(*id)).unwrap(),
        Value::Function(f) => write!(out, "<{}>", function_label(f, strings)).unwrap(),
    }
}
