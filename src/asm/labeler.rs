use std::collections::HashMap;

use crate::asm::AsmError;
use crate::asm::cleaner;

// Symbol table, finalized before any encoding happens so forward and
// backward references resolve identically.
#[derive(Debug, Default, PartialEq)]
pub struct LabelTable {
    table: HashMap<String, usize>,
}

impl LabelTable {
    pub fn new() -> LabelTable {
        LabelTable { table: HashMap::new() }
    }

    // A label names the position of the instruction that follows it, which
    // is past-the-end when the label terminates the file.
    pub fn insert(&mut self, name: String, position: usize) -> Result<(), AsmError> {
        if name.is_empty() || self.table.contains_key(&name) {
            return Err(AsmError::DuplicateLabel(name));
        }
        self.table.insert(name, position);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<usize, AsmError> {
        self.table
            .get(name)
            .copied()
            .ok_or_else(|| AsmError::LabelNotFound(name.to_string()))
    }
}

// Single scan over the cleaned token stream. Labels are recorded against
// the current instruction count, instructions are kept verbatim for the
// encoder.
pub fn scan(input: cleaner::Cleaner<'_>) -> Result<(Vec<String>, LabelTable), AsmError> {
    let mut insts: Vec<String> = Vec::new();
    let mut labels = LabelTable::new();

    for token in input {
        match token {
            cleaner::CToken::Label(name) => {
                labels.insert(name, insts.len())?;
            },
            cleaner::CToken::Inst(text) => {
                insts.push(text);
            },
        }
    }

    #[cfg(feature = "debug")]
    {
        // Debug label positioning
        println!("{:?}", insts.len());
        println!("{:?}", labels);
    }

    Ok((insts, labels))
}
