extern crate phf_codegen;

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() {
    // phf_codegen for the instruction registry
    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("opcode.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    write!(&mut file, "static OPCODE: phf::Map<&'static str, InstEnc> = ").unwrap();

    phf_codegen::Map::new()
        // R-type ALU ops all share opcode zero, funct disambiguates
        .entry("ADD",  "InstEnc{encoding: InstType::RegReg, opcode: 0b000000, funct: Some(0b100000)}")
        .entry("SUB",  "InstEnc{encoding: InstType::RegReg, opcode: 0b000000, funct: Some(0b100010)}")
        .entry("MULT", "InstEnc{encoding: InstType::RegReg, opcode: 0b000000, funct: Some(0b011000)}")
        .entry("AND",  "InstEnc{encoding: InstType::RegReg, opcode: 0b000000, funct: Some(0b100100)}")
        .entry("OR",   "InstEnc{encoding: InstType::RegReg, opcode: 0b000000, funct: Some(0b100101)}")
        .entry("XOR",  "InstEnc{encoding: InstType::RegReg, opcode: 0b000000, funct: Some(0b100110)}")
        .entry("SHR",  "InstEnc{encoding: InstType::RegReg, opcode: 0b000000, funct: Some(0b000010)}")
        .entry("SHL",  "InstEnc{encoding: InstType::RegReg, opcode: 0b000000, funct: Some(0b000000)}")
        .entry("DIV",  "InstEnc{encoding: InstType::RegReg, opcode: 0b000000, funct: Some(0b011010)}")

        .entry("ADDI", "InstEnc{encoding: InstType::RegImm, opcode: 0b001000, funct: None}")
        .entry("ANDI", "InstEnc{encoding: InstType::RegImm, opcode: 0b001100, funct: None}")
        .entry("ORI",  "InstEnc{encoding: InstType::RegImm, opcode: 0b001101, funct: None}")
        .entry("XORI", "InstEnc{encoding: InstType::RegImm, opcode: 0b001110, funct: None}")

        .entry("LW",   "InstEnc{encoding: InstType::LoadStore, opcode: 0b100011, funct: None}")
        .entry("LWS",  "InstEnc{encoding: InstType::LoadStore, opcode: 0b100111, funct: None}")
        .entry("SW",   "InstEnc{encoding: InstType::LoadStore, opcode: 0b101011, funct: None}")
        .entry("SWS",  "InstEnc{encoding: InstType::LoadStore, opcode: 0b101111, funct: None}")

        .entry("BEQ",  "InstEnc{encoding: InstType::Branch, opcode: 0b000100, funct: None}")
        .entry("BGT",  "InstEnc{encoding: InstType::Branch, opcode: 0b000111, funct: None}")

        .entry("J",    "InstEnc{encoding: InstType::Jump, opcode: 0b000010, funct: None}")
        .entry("CALL", "InstEnc{encoding: InstType::Jump, opcode: 0b000011, funct: None}")

        .entry("RET",  "InstEnc{encoding: InstType::Return, opcode: 0b000000, funct: None}")

        .build(&mut file)
        .unwrap();
    write!(&mut file, ";\n").unwrap();
}
