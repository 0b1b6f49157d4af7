use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use byteorder::{LittleEndian, WriteBytesExt};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Assembler for the GPU core ISA (MIPS32 derived)")]
struct Opts {
    /// Input assembly file
    input: PathBuf,
    /// Output binary file, little-endian words (defaults to <input>.bin)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print each encoded word
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let source = fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;

    let image = sgpu_asm::asm::assemble(&source)?;

    if opts.verbose {
        for (i, word) in image.iter().enumerate() {
            println!("{:4}: {:032b}", i, word);
        }
    }

    let binary_code = {
        let mut wtr = vec![];
        for word in &image {
            wtr.write_u32::<LittleEndian>(*word)?;
        }
        wtr
    };

    let output = opts
        .output
        .unwrap_or_else(|| opts.input.with_extension("bin"));
    fs::write(&output, &binary_code)
        .with_context(|| format!("writing {}", output.display()))?;

    Ok(())
}
