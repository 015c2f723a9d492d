use std::fs;
use std::io::{self, BufWriter, Write};

use anyhow::{anyhow, Result};

use keysymmap::logging::{print_debug, print_table_stats};
use keysymmap::{read_table, render, OutputNames};

mod cli;

fn main() -> Result<()> {
    let config = cli::parse_cli();

    if config.verbose {
        print_debug(format!("reading keysym definitions from '{}'", config.keysymdef.display()));
    }

    // read everything before touching the output so a bad input leaves no partial file
    let (table, stats) = read_table(&config.keysymdef)?;

    if config.verbose {
        print_debug(print_table_stats(&stats));
    }

    let names = OutputNames::default();
    match &config.output {
        Some(path) => {
            let file = fs::File::create(path)
                .map_err(|err| anyhow!("failed to create output file '{}': {}", path.display(), err))?;
            render(&table, &names, &mut BufWriter::new(file))?;

            if config.verbose {
                print_debug(format!("wrote {} entries to '{}'", table.len(), path.display()));
            }
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            render(&table, &names, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
