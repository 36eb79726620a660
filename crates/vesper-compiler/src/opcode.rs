/// Vesper stack-machine opcodes.
///
/// Instructions are byte-coded: one opcode byte followed by zero, one, or
/// two operand bytes. Jump deltas are unsigned 16-bit big-endian; constant
/// and local indices are single bytes, which caps both pools at 256 entries.
use std::fmt;

/// All Vesper opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Push consts[k]. Operand: k:u8.
    Constant = 0,
    Nil,
    True,
    False,
    Pop,
    /// Push locals[slot]. Operand: slot:u8.
    GetLocal,
    /// locals[slot] = peek. Operand: slot:u8.
    SetLocal,
    /// Operand: name constant index u8.
    GetGlobal,
    DefineGlobal,
    SetGlobal,
    Equal,
    Greater,
    Less,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    Not,
    Negate,
    /// Pop and report the value (print-like side effect).
    Info,
    /// Unconditional forward jump. Operand: delta:u16 BE.
    Jump,
    /// Forward jump when the top of stack is falsy (peeks). Operand: delta:u16 BE.
    JumpIfFalse,
    /// Backward jump. Operand: delta:u16 BE.
    Loop,
    /// Call the callable below argc arguments. Operand: argc:u8.
    Call,
    Return,
    /// Pop a module-name string and load the module.
    Import,
    /// Leave the innermost loop; unwound by the VM.
    Break,
}

impl OpCode {
    /// Decode an opcode from its byte, if valid.
    pub fn from_byte(byte: u8) -> Option<OpCode> {
        use OpCode::*;
        Some(match byte {
            0 => Constant,
            1 => Nil,
            2 => True,
            3 => False,
            4 => Pop,
            5 => GetLocal,
            6 => SetLocal,
            7 => GetGlobal,
            8 => DefineGlobal,
            9 => SetGlobal,
            10 => Equal,
            11 => Greater,
            12 => Less,
            13 => Add,
            14 => Subtract,
            15 => Multiply,
            16 => Divide,
            17 => Modulo,
            18 => Power,
            19 => Not,
            20 => Negate,
            21 => Info,
            22 => Jump,
            23 => JumpIfFalse,
            24 => Loop,
            25 => Call,
            26 => Return,
            27 => Import,
            28 => Break,
            _ => return None,
        })
    }

    /// Number of operand bytes following the opcode byte.
    pub fn operand_len(self) -> usize {
        use OpCode::*;
        match self {
            Constant | GetLocal | SetLocal | GetGlobal | DefineGlobal | SetGlobal | Call => 1,
            Jump | JumpIfFalse | Loop => 2,
            _ => 0,
        }
    }

    /// Mnemonic used by the disassembler.
    pub fn name(self) -> &'static str {
        use OpCode::*;
        match self {
            Constant => "CONSTANT",
            Nil => "NIL",
            True => "TRUE",
            False => "FALSE",
            Pop => "POP",
            GetLocal => "GET_LOCAL",
            SetLocal => "SET_LOCAL",
            GetGlobal => "GET_GLOBAL",
            DefineGlobal => "DEFINE_GLOBAL",
            SetGlobal => "SET_GLOBAL",
            Equal => "EQUAL",
            Greater => "GREATER",
            Less => "LESS",
            Add => "ADD",
            Subtract => "SUBTRACT",
            Multiply => "MULTIPLY",
            Divide => "DIVIDE",
            Modulo => "MODULO",
            Power => "POWER",
            Not => "NOT",
            Negate => "NEGATE",
            Info => "INFO",
            Jump => "JUMP",
            JumpIfFalse => "JUMP_IF_FALSE",
            Loop => "LOOP",
            Call => "CALL",
            Return => "RETURN",
            Import => "IMPORT",
            Break => "BREAK",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
