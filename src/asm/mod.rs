use thiserror::Error;

use crate::opcode;
use crate::opcode::InstType;

pub mod cleaner;
pub mod encoder;
pub mod labeler;

// Every failure is fatal to the run: the first error encountered during
// label scanning or encoding aborts with no partial output. The caller
// renders the message and picks the exit status.
#[derive(Error, Debug, PartialEq)]
pub enum AsmError {
    #[error("unknown mnemonic: {0}")]
    UnknownMnemonic(String),
    #[error("malformed operands: {0}")]
    MalformedOperands(String),
    #[error("duplicate label: {0}")]
    DuplicateLabel(String),
    #[error("label not found: {0}")]
    LabelNotFound(String),
}

/// Assemble source text into the program image, one u32 word per
/// instruction in source order.
///
/// Two phases: a single scan that normalizes lines and finalizes the label
/// table, then a sequential encode that never mutates the table again, so
/// forward and backward branch targets come out identically.
pub fn assemble(input: &str) -> Result<Vec<u32>, AsmError> {
    let (insts, labels) = labeler::scan(cleaner::Cleaner::new(input))?;

    let mut image: Vec<u32> = Vec::with_capacity(insts.len());
    for text in &insts {
        image.push(encode_line(text, &labels)?);
    }
    Ok(image)
}

fn encode_line(text: &str, labels: &labeler::LabelTable) -> Result<u32, AsmError> {
    let token = text.split_whitespace().next().unwrap_or(text);

    // Anything behind a `.` marks the scalar variant of the base mnemonic
    let (mnemonic, scalar) = match token.find('.') {
        Some(x) => (&token[..x], true),
        None => (token, false),
    };

    let enc = opcode::lookup(mnemonic)
        .ok_or_else(|| AsmError::UnknownMnemonic(mnemonic.to_string()))?;

    let partial = match enc.encoding {
        InstType::RegReg => encoder::reg_reg(text, enc.funct.unwrap_or(0))?,
        InstType::RegImm => encoder::reg_imm(text)?,
        InstType::LoadStore => encoder::load_store(text)?,
        InstType::Branch => encoder::branch(text, labels)?,
        InstType::Jump => encoder::jump(text, labels)?,
        InstType::Return => encoder::ret(),
    };

    let mut word = partial | (enc.opcode << 26);
    if scalar {
        word |= 1 << 30;
    }
    Ok(word)
}

#[cfg(test)]
pub mod assemble_image {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_reg_reg_example_word() {
        let image = assemble("ADD $1,$2,$3").unwrap();
        assert_eq!(image, vec![0b100000 | (1 << 11) | (2 << 21) | (3 << 16)]);
    }

    #[test]
    fn test_opcode_field_placement() {
        let image = assemble("ADDI $1,$2,5").unwrap();
        assert_eq!(
            image,
            vec![(0b001000 << 26) | 5 | (1 << 16) | (2 << 21)]
        );
    }

    #[test]
    fn test_scalar_suffix_sets_bit_30() {
        let plain = assemble("ADD $1,$2,$3").unwrap();
        let scalar = assemble("ADD.S $1,$2,$3").unwrap();

        assert_eq!(scalar[0], plain[0] | (1 << 30));
    }

    #[test]
    fn test_ret_encodes_to_zero() {
        assert_eq!(assemble("RET"), Ok(vec![0]));
    }

    #[test]
    fn test_branch_low_bits_are_label_index() {
        let input = "ADDI $1,$0,1\nADDI $2,$0,2\nL1: ADD $3,$1,$2\nBEQ $1,$2,L1";
        let image = assemble(input).unwrap();

        assert_eq!(image.len(), 4);
        assert_eq!(image[3] & 0xFFFF, 2);
        assert_eq!(image[3] >> 26, 0b000100);
    }

    #[test]
    fn test_forward_and_backward_branches_match() {
        // Same label index lands in both words regardless of scan direction
        let fwd = assemble("BEQ $1,$2,L\nRET\nL: RET").unwrap();
        let bwd = assemble("RET\nRET\nL: BEQ $1,$2,L").unwrap();

        assert_eq!(fwd[0] & 0xFFFF, 2);
        assert_eq!(bwd[2] & 0xFFFF, 2);
    }

    #[test]
    fn test_jump_and_call() {
        let image = assemble("main: ADDI $1,$0,1\nCALL fun\nJ main\nfun: RET").unwrap();

        assert_eq!(image[1], (0b000011 << 26) | 3);
        assert_eq!(image[2], 0b000010 << 26);
    }

    #[test]
    fn test_unknown_mnemonic_is_fatal() {
        assert_eq!(
            assemble("FOO $1,$2"),
            Err(AsmError::UnknownMnemonic("FOO".to_string()))
        );
    }

    #[test]
    fn test_duplicate_label_produces_no_output() {
        assert_eq!(
            assemble("L: RET\nL: RET"),
            Err(AsmError::DuplicateLabel("L".to_string()))
        );
    }

    #[test]
    fn test_unresolved_branch_target() {
        assert_eq!(
            assemble("BEQ $1,$2,missing"),
            Err(AsmError::LabelNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let input = "start: LW $1,0($2)\nADD.S $3,$1,$1\nSW $3,4($2)\nBGT $3,$1,start\nRET";

        let first = assemble(input).unwrap();
        let second = assemble(input).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_word_per_instruction() {
        let input = "; header comment\nl1:\nADDI $1,$0,3\nl2: LWS $2,0($1)\nSWS $2,4($1)";
        let image = assemble(input).unwrap();

        assert_eq!(image.len(), 3);
        assert_eq!(image[1] >> 26, 0b100111);
        assert_eq!(image[2] >> 26, 0b101111);
    }
}
