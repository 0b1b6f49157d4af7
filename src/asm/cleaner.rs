use std::str::Lines;

// Normalized source stream. Comments and blank lines are gone by this
// stage; a line carrying both a label and an instruction emits two tokens.
#[derive(Debug, PartialEq)]
pub enum CToken {
    Label(String),
    Inst(String),
}

// Cleaner
// Instruction text is kept verbatim (mnemonic, suffix and operands) so the
// encoder stage can re-extract operands from the same string the source had.
pub struct Cleaner<'a> {
    input_iter: Lines<'a>,
    pending: Option<String>,
}

impl<'a> Cleaner<'a> {
    pub fn new(input: &'a str) -> Cleaner<'a> {
        Cleaner { input_iter: input.lines(), pending: None }
    }

    pub fn next_token(&mut self) -> Option<CToken> {
        // A label line can leave its trailing instruction behind
        if let Some(inst) = self.pending.take() {
            return Some(CToken::Inst(inst));
        }

        for line in self.input_iter.by_ref() {
            let line = match line.find(';') {
                Some(x) => &line[..x],
                None => line,
            };
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            match line.find(':') {
                Some(x) => {
                    let rest = line[x + 1..].trim();
                    if !rest.is_empty() {
                        self.pending = Some(rest.to_string());
                    }
                    return Some(CToken::Label(line[..x].to_string()));
                },
                None => return Some(CToken::Inst(line.to_string())),
            }
        }

        None
    }
}

impl<'a> Iterator for Cleaner<'a> {
    type Item = CToken;
    fn next(&mut self) -> Option<CToken> {
        self.next_token()
    }
}
