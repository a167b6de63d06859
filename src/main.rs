use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;

use swf_dump::{read_signature, skip_header, Error, Result, TagTypes, TagWalker};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: swf-dump <file>");
        process::exit(1);
    }

    match dump(&args[1]) {
        Ok(()) => {}
        Err(err @ Error::BadSignature { .. }) => {
            eprintln!("{}", err);
            process::exit(2);
        }
        // Truncated or otherwise unreadable input past the signature gate is
        // a partial result, not a failure; the exit code stays 0.
        Err(err) => eprintln!("swf-dump: {}", err),
    }
}

fn dump(path: &str) -> Result<()> {
    let mut reader = BufReader::new(File::open(path)?);
    read_signature(&mut reader)?;
    skip_header(&mut reader)?;

    let types = TagTypes::new();
    println!("{:>10} {:>8} {:>20} {:>10}", "offset", "tag_code", "name", "length");
    for tag in TagWalker::new(reader, &types) {
        let tag = match tag {
            Ok(tag) => tag,
            Err(err) => {
                eprintln!("swf-dump: scan stopped early: {}", err);
                break;
            }
        };
        println!(
            "{:#010x} {:#04x}     {:>20} {:#010x}",
            tag.offset, tag.code, tag.name, tag.length
        );
    }
    Ok(())
}
