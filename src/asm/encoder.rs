use twiddle::Twiddle;

use crate::asm::AsmError;
use crate::asm::labeler::LabelTable;

// One encoder per format class. Each one re-extracts its operands from the
// raw instruction text (mnemonic included) and returns a partial word; the
// driver merges the opcode and the scalar bit on top. Fields are masked to
// their declared width, so an out-of-range literal wraps instead of
// corrupting a neighboring field.

fn select_and_shift(value: u32, hi: usize, lo: usize, shift: usize) -> u32 {
    ((value & u32::mask(hi..=lo)) >> lo) << shift
}

fn malformed(text: &str) -> AsmError {
    AsmError::MalformedOperands(text.to_string())
}

fn after(text: &str, pat: char) -> Option<&str> {
    text.find(pat).map(|x| &text[x + 1..])
}

// Registers are a single decimal digit behind a `$` sigil. Returns the
// register value and the text following the digit.
fn take_reg(text: &str) -> Option<(u32, &str)> {
    let rest = after(text, '$')?;
    let mut chars = rest.chars();
    let reg = chars.next()?.to_digit(10)?;
    Some((reg, chars.as_str()))
}

// Wide parse so oversized literals still wrap to their field instead of
// being rejected outright.
fn take_imm(text: &str) -> Option<u32> {
    text.trim().parse::<i128>().ok().map(|x| x as u32)
}

// funct[0:6) | rd[11:16) | rt[16:21) | rs[21:26)
// Text order: rd, rs, rt
pub fn reg_reg(text: &str, funct: u32) -> Result<u32, AsmError> {
    let mut ret = select_and_shift(funct, 5, 0, 0);

    let (rd, rest) = take_reg(text).ok_or_else(|| malformed(text))?;
    let (rs, rest) = take_reg(rest).ok_or_else(|| malformed(text))?;
    let (rt, _) = take_reg(rest).ok_or_else(|| malformed(text))?;

    ret |= select_and_shift(rd, 4, 0, 11);
    ret |= select_and_shift(rs, 4, 0, 21);
    ret |= select_and_shift(rt, 4, 0, 16);
    Ok(ret)
}

// imm[0:16) | rt[16:21) | rs[21:26)
// Text order: rt, rs, literal after the comma
pub fn reg_imm(text: &str) -> Result<u32, AsmError> {
    let (rt, rest) = take_reg(text).ok_or_else(|| malformed(text))?;
    let (rs, rest) = take_reg(rest).ok_or_else(|| malformed(text))?;

    let literal = after(rest, ',').ok_or_else(|| malformed(text))?;
    let imm = take_imm(literal).ok_or_else(|| malformed(text))?;

    let mut ret = select_and_shift(imm, 15, 0, 0);
    ret |= select_and_shift(rt, 4, 0, 16);
    ret |= select_and_shift(rs, 4, 0, 21);
    Ok(ret)
}

// imm[0:16) | rt[16:21) | rs[21:26)
// Text order: rt, literal before `(`, rs inside the parens
pub fn load_store(text: &str) -> Result<u32, AsmError> {
    let (rt, rest) = take_reg(text).ok_or_else(|| malformed(text))?;

    let literal = after(rest, ',').ok_or_else(|| malformed(text))?;
    let literal = match literal.find('(') {
        Some(x) => &literal[..x],
        None => literal,
    };
    if literal.trim().is_empty() {
        return Err(malformed(text));
    }
    let imm = take_imm(literal).ok_or_else(|| malformed(text))?;

    let (rs, _) = take_reg(rest).ok_or_else(|| malformed(text))?;

    let mut ret = select_and_shift(imm, 15, 0, 0);
    ret |= select_and_shift(rt, 4, 0, 16);
    ret |= select_and_shift(rs, 4, 0, 21);
    Ok(ret)
}

// imm[0:16) | rt[16:21) | rs[21:26)
// Text order: rs, rt, label after the comma. The target is the label's
// absolute instruction index, not a delta relative to the branch itself.
pub fn branch(text: &str, labels: &LabelTable) -> Result<u32, AsmError> {
    let (rs, rest) = take_reg(text).ok_or_else(|| malformed(text))?;
    let (rt, rest) = take_reg(rest).ok_or_else(|| malformed(text))?;

    let name = after(rest, ',').ok_or_else(|| malformed(text))?.trim();
    if name.is_empty() {
        return Err(malformed(text));
    }
    let target = labels.resolve(name)?;

    let mut ret = select_and_shift(target as u32, 15, 0, 0);
    ret |= select_and_shift(rs, 4, 0, 21);
    ret |= select_and_shift(rt, 4, 0, 16);
    Ok(ret)
}

// The resolved label index is the whole partial word, no field shifting.
pub fn jump(text: &str, labels: &LabelTable) -> Result<u32, AsmError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(malformed(text));
    }
    let target = labels.resolve(tokens[1])?;
    Ok(target as u32)
}

// Fixed encoding, any operand text is ignored.
pub fn ret() -> u32 {
    0
}
