use phf;

// Instruction formats for the GPU core ISA (MIPS32 derived)
// Notes:
// Register - $0..$9, written as a single decimal digit after the sigil
// Instruction - one u32 word, the word index is the instruction address
// Opcode - bits [26:32), funct - bits [0:6) for R-type ops sharing opcode 0
// Scalar variant - a `.S` mnemonic suffix sets bit 30 of the final word
#[derive(Debug)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InstType {
    RegReg,
    RegImm,
    LoadStore,
    Branch,
    Jump,
    Return,
}

// Inst Encoding
#[derive(Debug)]
#[derive(Clone, Copy)]
pub struct InstEnc {
    pub encoding: InstType,
    pub opcode:   u32,
    pub funct:    Option<u32>,
}

// Codegen from phf_codegen
include!(concat!(env!("OUT_DIR"), "/opcode.rs"));

pub fn lookup(mnemonic: &str) -> Option<InstEnc> {
    OPCODE.get(mnemonic).cloned()
}
