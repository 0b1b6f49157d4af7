pub mod opcode;
pub mod asm;
