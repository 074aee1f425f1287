//! Command-line driver for the AES-128 round engine and its T-box path.

#![forbid(unsafe_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use aes_core::{encrypt_block, Aes128Key, Block};
use aes_tbox::{tables, TBoxCipher, Table};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

const DEFAULT_REPETITIONS: u64 = 1_000_000;
const DEFAULT_KEY_HEX: &str = "00112233445566778899aabbccddeeff";
const DEFAULT_BLOCK_HEX: &str = "abcdef0123456789abcdef0123456789";

/// AES-128 T-box CLI.
#[derive(Parser)]
#[command(name = "aestbox", version, author, about = "AES-128 with precomputed T-boxes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Which implementation encrypts the blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Engine {
    /// Round-by-round transforms, expanding the key for every block.
    #[default]
    Reference,
    /// T-box lookups with a schedule expanded once.
    Tbox,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a single 16-byte block.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Implementation to use.
        #[arg(long, value_enum, default_value_t = Engine::Reference)]
        engine: Engine,
    },
    /// Encrypt a block repeatedly, feeding each output back in, and report the time.
    Bench {
        /// Number of encryptions; non-positive values fall back to the default.
        #[arg(allow_negative_numbers = true)]
        repetitions: Option<i64>,
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX", default_value = DEFAULT_KEY_HEX)]
        key_hex: String,
        /// Initial block as 32 hex characters.
        #[arg(long, value_name = "HEX", default_value = DEFAULT_BLOCK_HEX)]
        block_hex: String,
        /// Implementation to use.
        #[arg(long, value_enum, default_value_t = Engine::Reference)]
        engine: Engine,
    },
    /// Print a T-box, or write all four tables to a file.
    Tables {
        /// Table to print (0..=3).
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=3))]
        index: u8,
        /// Write all four tables (bincode) to this path instead of printing.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Verify the T-box path against the round engine on random inputs.
    Check {
        /// Number of random key/block pairs.
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            block_hex,
            engine,
        } => cmd_enc(&key_hex, &block_hex, engine),
        Commands::Bench {
            repetitions,
            key_hex,
            block_hex,
            engine,
        } => cmd_bench(repetitions, &key_hex, &block_hex, engine),
        Commands::Tables { index, out } => cmd_tables(index, out.as_ref()),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
    }
}

/// A key bound to one of the two implementations.
enum Encryptor {
    Reference(Aes128Key),
    Tbox(TBoxCipher),
}

impl Encryptor {
    fn new(engine: Engine, key: &Aes128Key) -> Self {
        match engine {
            Engine::Reference => Self::Reference(*key),
            Engine::Tbox => Self::Tbox(TBoxCipher::new(key)),
        }
    }

    #[inline]
    fn encrypt(&self, block: &Block) -> Block {
        match self {
            Self::Reference(key) => encrypt_block(key, block),
            Self::Tbox(cipher) => cipher.encrypt_block(block),
        }
    }
}

fn cmd_enc(key_hex: &str, block_hex: &str, engine: Engine) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let ct = Encryptor::new(engine, &key).encrypt(&block);
    println!("{}", hex::encode(ct));
    Ok(())
}

fn cmd_bench(
    repetitions: Option<i64>,
    key_hex: &str,
    block_hex: &str,
    engine: Engine,
) -> Result<()> {
    let repetitions = effective_repetitions(repetitions);
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    info!("benchmarking {engine:?} engine over {repetitions} encryptions");

    let encryptor = Encryptor::new(engine, &key);
    let (last, elapsed) = run_chained(&encryptor, block, repetitions);

    println!("It took me {} ms.", elapsed.as_millis());
    println!("final block: {}", hex::encode(last));
    info!(
        "{:.1} ns per block",
        elapsed.as_nanos() as f64 / repetitions as f64
    );
    Ok(())
}

fn cmd_tables(index: u8, out: Option<&PathBuf>) -> Result<()> {
    let tboxes = tables();
    if let Some(path) = out {
        let bytes = tboxes.to_bytes().context("serialize tables")?;
        fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))?;
        info!("wrote {} bytes of T-box tables to {}", bytes.len(), path.display());
        return Ok(());
    }
    let table = tboxes
        .table(usize::from(index))
        .with_context(|| format!("no table T{index}"))?;
    debug!("printing T{index}");
    print!("{}", format_table(table));
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    for sample in 0..samples {
        let mut key_bytes = [0u8; 16];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        rng.fill_bytes(&mut block);
        let key = Aes128Key::from(key_bytes);

        let expected = encrypt_block(&key, &block);
        let actual = TBoxCipher::new(&key).encrypt_block(&block);
        if actual != expected {
            bail!(
                "mismatch on sample {sample}: key {} block {} reference {} tbox {}",
                hex::encode(key_bytes),
                hex::encode(block),
                hex::encode(expected),
                hex::encode(actual)
            );
        }
    }
    info!("{samples} samples agree");
    println!("ok");
    Ok(())
}

fn effective_repetitions(requested: Option<i64>) -> u64 {
    match requested {
        Some(n) if n > 0 => n as u64,
        _ => DEFAULT_REPETITIONS,
    }
}

fn run_chained(encryptor: &Encryptor, mut block: Block, repetitions: u64) -> (Block, Duration) {
    let start = Instant::now();
    for _ in 0..repetitions {
        block = encryptor.encrypt(&block);
    }
    (block, start.elapsed())
}

fn format_table(table: &Table) -> String {
    let mut out = String::with_capacity(table.len() * 11);
    for (i, word) in table.iter().enumerate() {
        let _ = write!(out, " {word:08x} ");
        if i % 8 == 7 {
            out.push('\n');
        }
    }
    out
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice())
        .context("AES-128 key must be 16 bytes (32 hex characters)")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != 16 {
        bail!("block must be 16 bytes (32 hex characters), got {}", bytes.len());
    }
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repetitions_default_for_non_positive() {
        assert_eq!(effective_repetitions(None), DEFAULT_REPETITIONS);
        assert_eq!(effective_repetitions(Some(0)), DEFAULT_REPETITIONS);
        assert_eq!(effective_repetitions(Some(-5)), DEFAULT_REPETITIONS);
        assert_eq!(effective_repetitions(Some(42)), 42);
    }

    #[test]
    fn hex_inputs_are_length_checked() {
        assert!(parse_key_hex("000102030405060708090a0b0c0d0e0f").is_ok());
        assert!(parse_key_hex("0001").is_err());
        assert!(parse_key_hex("zz").is_err());
        assert!(parse_block_hex(DEFAULT_BLOCK_HEX).is_ok());
        assert!(parse_block_hex("00112233445566778899aabbccddeeff00").is_err());
    }

    #[test]
    fn engines_agree_on_chained_run() {
        let key = parse_key_hex(DEFAULT_KEY_HEX).expect("key");
        let block = parse_block_hex(DEFAULT_BLOCK_HEX).expect("block");
        let (reference, _) = run_chained(&Encryptor::new(Engine::Reference, &key), block, 100);
        let (tbox, _) = run_chained(&Encryptor::new(Engine::Tbox, &key), block, 100);
        assert_eq!(reference, tbox);
        assert_ne!(reference, block);
    }

    #[test]
    fn table_dump_has_eight_words_per_line() {
        let dump = format_table(&tables().t3);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 32);
        assert!(lines.iter().all(|l| l.split_whitespace().count() == 8));
        // T3[0] = rotate_left(0xa56363c6, 8)
        assert!(lines[0].starts_with(" 6363c6a5 "));
    }

    #[test]
    fn cli_parses_bench_defaults() {
        let cli = Cli::try_parse_from(["aestbox", "bench", "-3"]).expect("parse");
        match cli.command {
            Commands::Bench {
                repetitions,
                engine,
                ..
            } => {
                assert_eq!(repetitions, Some(-3));
                assert_eq!(engine, Engine::Reference);
            }
            _ => panic!("expected bench"),
        }
    }
}
