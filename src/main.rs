//! Splits a word-vector dump into per-prefix bucket files (`aa.txt` ..
//! `zz.txt`) so later lookups only have to open one small file. Lines whose
//! leading word is plain `[A-Za-z0-9_-]+` are dropped, everything else is
//! appended to the bucket named by the word's first two lowercase letters.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::env;
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::hash::BuildHasherDefault;
use std::io::{BufWriter, Write};
use std::path::Path;

use memmap2::Mmap;
use regex::bytes::Regex;

type ThreadSafeError = Box<dyn Error + Send + Sync>;
type FxHashMap<K, V> = HashMap<K, V, BuildHasherDefault<fxhash::FxHasher>>;

/// Leading word of a line: everything before the LAST space byte.
/// A line with no space has an empty word.
fn leading_word(line: &[u8]) -> &[u8] {
    let idx = line.iter().rposition(|&b| b == b' ').unwrap_or(0);
    &line[..idx]
}

/// Bucket key for an already-lowercased word, if it starts with two
/// ASCII letters. Anything else (too short, digit, punctuation, bytes
/// outside a-z) has no bucket and the line is dropped.
fn bucket_key(word: &[u8]) -> Option<[u8; 2]> {
    match word {
        &[a, b, ..] if a.is_ascii_lowercase() && b.is_ascii_lowercase() => Some([a, b]),
        _ => None,
    }
}

/// Single pass over the input, appending each routed line to
/// `<output_dir>/<key>.txt`. Returns (lines read, lines routed).
///
/// The input is treated as raw bytes (the dump is latin-1, where every
/// byte is a valid character), so lines are written back untouched,
/// terminator included. Bucket handles stay open for the whole run and
/// are flushed at the end; the directory itself is never created here.
fn route(input_path: &str, output_dir: &str) -> Result<(usize, usize), ThreadSafeError> {
    // ASCII \w only; words with any other byte get bucketed
    let clean = Regex::new(r"(?-u)^[\w-]+$")?;

    let file = File::open(input_path)?;
    if file.metadata()?.len() == 0 {
        return Ok((0, 0)); // mapping a zero-length file fails
    }
    let mmap = unsafe { Mmap::map(&file)? };

    let mut writers: FxHashMap<[u8; 2], BufWriter<File>> = FxHashMap::default();
    let mut read = 0usize;
    let mut routed = 0usize;

    for line in mmap.split_inclusive(|&b| b == b'\n') {
        read += 1;
        let word = leading_word(line).to_ascii_lowercase();
        if clean.is_match(&word) {
            continue;
        }
        let Some(key) = bucket_key(&word) else {
            continue;
        };
        let writer = match writers.entry(key) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                let name = format!("{}{}.txt", key[0] as char, key[1] as char);
                let f = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(Path::new(output_dir).join(name))?;
                e.insert(BufWriter::new(f))
            }
        };
        writer.write_all(line)?;
        routed += 1;
    }

    writers.into_values().try_for_each(|mut w| w.flush())?;
    Ok((read, routed))
}

fn main() -> Result<(), ThreadSafeError> {
    let args: Vec<String> = env::args().collect();
    println!("Number of arguments: {} arguments.", args.len());
    println!("Argument List: {:?}", args);

    if args.len() != 3 {
        println!("Usage: {} <vec_file> <output_dir>", args[0]);
        return Ok(());
    }

    let (read, routed) = route(&args[1], &args[2])?;
    println!("{} lines read, {} routed into '{}'", read, routed, args[2]);
    Ok(())
}
